/*!
# `CLEAR`

## Purpose
Delete the program and all variables.

## Example
```text
10 PRINT 1
CLEAR
LIST
```

*/
