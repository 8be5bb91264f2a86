/*!
# Introductory Tutorial

Begin by opening a terminal and running the executable. Type CTRL-D
or `QUIT` to exit. Stop a running program with CTRL-C.

Lines typed without a line number are run immediately.

<pre><code>&nbsp;> PRINT 6 * 7
&nbsp;  42
</code></pre>

Lines that begin with a number are stored as a program. The program is
kept in line number order no matter the order you type it in. Typing
a line number that is already in the program replaces that line.
Typing a line number by itself deletes that line.

<pre><code>&nbsp;> 20 PRINT A * 2
&nbsp;> 10 INPUT A
&nbsp;> LIST
&nbsp;  10 INPUT A
&nbsp;  20 PRINT A * 2
&nbsp;> RUN
&nbsp;   ? 21
&nbsp;  42
</code></pre>

A program can be loaded when BASIC starts by naming a file of numbered
lines on the command line.

*/
