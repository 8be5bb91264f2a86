/*!
# `QUIT`

## Purpose
Leave BASIC. End of input (CTRL-D) does the same.

*/
