/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If `<line number>` doesn't exist an `UNDEFINED LINE` error is reported
and the program continues with the next line.

## Example
```text
10 GOTO 30
20 PRINT 20
30 PRINT 30
RUN
30
```

*/
