/*!
# `LET <variable> = <expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The word `LET` is required. A reserved word can not be used as the
variable, so `LET PRINT = 1` is a `SYNTAX ERROR`. The variable is created
if it does not exist yet.

## Example
```text
LET A = 6
LET B2 = A * 7
PRINT B2
42
```

*/
