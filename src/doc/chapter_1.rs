/*!
# Expressions

All values are signed 32-bit integers. A calculation that does not fit
is an `OVERFLOW` error. Division truncates toward zero and dividing by
zero is a `DIVISION BY ZERO` error.

Variable names are an ASCII letter followed by letters and digits.
Names are case-sensitive, so `A` and `a` are different variables.
Reserved words are upper case. Using a variable before giving it a
value is a `VARIABLE NOT DEFINED` error.

Operators from lowest to highest precedence. Operators of equal
precedence are evaluated left to right.

| Operator | Meaning        |
|----------|----------------|
| `+` `-`  | Add, subtract  |
| `*` `/`  | Multiply, divide |

Parentheses group. There is no unary minus; write `0 - 5` for a
negative literal.

```text
PRINT 7 - 2 - 1
4
PRINT (1 + 2) * 3
9
```

The comparisons `<`, `=` and `>` may only appear in the condition of `IF`.

*/
