/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a whole number from the terminal.

## Remarks
The prompt is ` ? `. The answer must be digits with an optional leading
minus sign. Anything else prints `INVALID NUMBER` and prompts again.

## Example
```text
10 INPUT N
20 PRINT N * 2
RUN
 ? five
INVALID NUMBER
 ? 5
10
```

*/
