/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Move execution to a line when a comparison holds.

## Remarks
The comparison is one of `<`, `=` or `>`. The first comparison operator
in the condition separates the two expressions, so `IF 1 = 1 = 1 THEN 10`
is a `SYNTAX ERROR` when it runs. The condition is only checked when
the statement runs.

## Example
```text
10 LET A = 1
20 PRINT A
30 LET A = A + 1
40 IF A < 4 THEN 20
RUN
1
2
3
```

*/
