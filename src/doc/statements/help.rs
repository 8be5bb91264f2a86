/*!
# `HELP`

## Purpose
Print a summary of the commands and statements.

*/
