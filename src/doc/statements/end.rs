/*!
# `END`

## Purpose
Ends the program.

## Remarks
A program also ends after its last line. `END` is not allowed as a
direct statement.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
```

*/
