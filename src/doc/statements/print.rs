/*!
# `PRINT <expression>`

## Purpose
Prints the value of one expression followed by a newline.

## Example
```text
PRINT (1 + 2) * 3
9
```

*/
