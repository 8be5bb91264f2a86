/*!
# `RUN`

## Purpose
Start the program at its first line.

## Remarks
Variables keep their values. Stop a running program with CTRL-C.

## Example
```text
10 PRINT 42
RUN
42
```

*/
