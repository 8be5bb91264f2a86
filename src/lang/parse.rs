use super::{ast::*, lex::tokenize, token::*, Column, Error, LineNumber, MaxValue};

type Result<T> = std::result::Result<T, Error>;

/// Parse the tokens of a numbered program line.
pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Statement> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

/// Parse the tokens of a direct line.
pub fn parse_command(tokens: &[Token]) -> Result<Command> {
    Parser::parse_command(tokens)
}

/// Scan and parse the condition text of an `IF` statement.
/// The first `<`, `=` or `>` splits the two sides.
/// Columns are counted from `offset`, where the text starts in its line.
pub fn parse_condition(text: &str, offset: usize) -> Result<Comparison> {
    let tokens = tokenize(text);
    let split = match tokens.iter().position(|t| t.is_comparison()) {
        Some(index) => index,
        None => return Err(error!(SyntaxError; "EXPECTED COMPARISON")),
    };
    let rhs_offset: usize = tokens[..=split]
        .iter()
        .map(|t| t.to_string().chars().count())
        .sum();
    let lhs = Parser::parse_expression(&tokens[..split], offset)?;
    let rhs = Parser::parse_expression(&tokens[split + 1..], offset + rhs_offset)?;
    match &tokens[split] {
        Token::Operator(Operator::Equal) => Ok(Comparison::Equal(lhs, rhs)),
        Token::Operator(Operator::Less) => Ok(Comparison::Less(lhs, rhs)),
        Token::Operator(Operator::Greater) => Ok(Comparison::Greater(lhs, rhs)),
        _ => Err(error!(InternalError; "NOT A COMPARISON")),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], offset: usize) -> Parser<'a> {
        Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: offset..offset,
        }
    }

    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser::new(tokens, 0);
        match parse.statement() {
            Ok(s) => Ok(s),
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn parse_command(tokens: &'a [Token]) -> Result<Command> {
        let mut parse = Parser::new(tokens, 0);
        match parse.command() {
            Ok(c) => Ok(c),
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn parse_expression(tokens: &'a [Token], offset: usize) -> Result<Expression> {
        let mut parse = Parser::new(tokens, offset);
        let expr = parse.expression().and_then(|expr| {
            parse.expect_end()?;
            Ok(expr)
        });
        match expr {
            Ok(expr) => Ok(expr),
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn command(&mut self) -> Result<Command> {
        let command = match self.peek() {
            Some(Token::Word(Word::Run)) => Command::Run,
            Some(Token::Word(Word::List)) => Command::List,
            Some(Token::Word(Word::Clear)) => Command::Clear,
            Some(Token::Word(Word::Quit)) => Command::Quit,
            Some(Token::Word(Word::Help)) => Command::Help,
            Some(Token::Word(Word::End)) | Some(Token::Word(Word::Goto)) | Some(Token::Word(Word::If)) => {
                self.next();
                return Err(error!(IllegalDirect));
            }
            Some(Token::Literal(Literal::Integer(_))) => {
                self.next();
                return Err(error!(LineNumberError; "INVALID LINE NUMBER"));
            }
            _ => return Ok(Command::Statement(self.statement()?)),
        };
        self.next();
        self.expect_end()?;
        Ok(command)
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            Some(Token::Word(word)) => {
                let column = self.column();
                Statement::for_word(self, word, column)
            }
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::Ident(i)) => Expression::Var(this.column(), i.as_str().into()),
                Some(Token::Literal(Literal::Integer(s))) => {
                    let column = this.column();
                    match s.parse::<i32>() {
                        Ok(n) => Expression::Integer(column, n),
                        Err(_) => return Err(error!(Overflow, ..&column)),
                    }
                }
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) if !op.is_comparison() => op.clone(),
                    _ => break,
                };
                let op_precedence = Expression::op_precedence(&op);
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let column = this.column();
                let rhs = parse(this, op_precedence + 1)?;
                lhs = Expression::for_binary_op(column, &op, lhs, rhs);
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn variable(&mut self) -> Result<Variable> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(Variable(self.column(), i.as_str().into())),
            Some(Token::Word(_)) => Err(error!(SyntaxError; "RESERVED WORD")),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn line_number(&mut self) -> Result<u16> {
        match self.next() {
            Some(Token::Literal(Literal::Integer(s))) => match s.parse::<u16>() {
                Ok(n) if n > 0 && n <= LineNumber::max_value() => Ok(n),
                _ => Err(error!(LineNumberError; "INVALID LINE NUMBER")),
            },
            _ => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(_) => Err(error!(SyntaxError; "UNEXPECTED TOKEN")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Word(_) => {"EXPECTED RESERVED WORD"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED IDENTIFIER"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"EXPECTED RIGHT PARENTHESIS"}
            }
        ))
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
            Equal | Less | Greater => unreachable!("comparison in arithmetic expression"),
        }
    }

    fn op_precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Equal | Less | Greater => 0,
            Plus | Minus => 10,
            Multiply | Divide => 20,
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word, column: Column) -> Result<Statement> {
        use Word::*;
        let statement = match word {
            Rem => {
                while parse.next().is_some() {}
                return Ok(Statement::Rem(column));
            }
            Let => Self::r#let(parse, column)?,
            Print => Statement::Print(column, parse.expression()?),
            Input => Statement::Input(column, parse.variable()?),
            End => Statement::End(column),
            Goto => Statement::Goto(column, parse.line_number()?),
            If => Self::r#if(parse, column)?,
            Then | Run | List | Clear | Quit | Help => {
                return Err(error!(SyntaxError; "EXPECTED STATEMENT"))
            }
        };
        parse.expect_end()?;
        Ok(statement)
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, var, expr))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut condition = String::new();
        let mut text_col: Option<Column> = None;
        loop {
            parse.col.start = parse.col.end;
            let t = match parse.token_stream.next() {
                Some(t) => t,
                None => return Err(error!(SyntaxError; "EXPECTED THEN")),
            };
            parse.col.end += t.to_string().chars().count();
            match t {
                Token::Word(Word::Then) => break,
                Token::Whitespace(_) => {}
                _ => {
                    text_col = match text_col {
                        Some(col) => Some(col.start..parse.col.end),
                        None => Some(parse.col.clone()),
                    }
                }
            }
            condition.push_str(&t.to_string());
        }
        let text_col = match text_col {
            Some(col) => col,
            None => return Err(error!(SyntaxError; "EXPECTED CONDITION")),
        };
        let condition = condition.trim().to_string();
        let line_number = parse.line_number()?;
        Ok(Statement::If(
            column,
            Condition(text_col, condition),
            line_number,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;

    fn parse_str(s: &str) -> Statement {
        let (lin, tokens) = lex(s);
        match parse(lin, &tokens) {
            Ok(s) => s,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn parse_err(s: &str) -> Error {
        let (lin, tokens) = lex(s);
        match parse(lin, &tokens) {
            Ok(s) => panic!("parsed {:?}", s),
            Err(e) => e,
        }
    }

    fn command_str(s: &str) -> Result<Command> {
        parse_command(&tokenize(s))
    }

    #[test]
    fn test_let() {
        let answer = Statement::Let(
            0..3,
            Variable(4..7, "TER".into()),
            Expression::Var(10..13, "bar".into()),
        );
        assert_eq!(parse_str("10 LET TER = bar"), answer);
    }

    #[test]
    fn test_let_reserved_word() {
        let e = parse_err("10 LET PRINT = 1");
        assert_eq!(e.code(), super::super::ErrorCode::SyntaxError);
        assert_eq!(e.to_string(), "SYNTAX ERROR IN 10 (4..9); RESERVED WORD");
    }

    #[test]
    fn test_precedence_and_paren() {
        let answer = Statement::Print(
            0..5,
            Expression::Subtract(
                8..9,
                Box::new(Expression::Integer(7..8, 2)),
                Box::new(Expression::Multiply(
                    14..15,
                    Box::new(Expression::Add(
                        11..12,
                        Box::new(Expression::Integer(10..11, 3)),
                        Box::new(Expression::Var(12..13, "A".into())),
                    )),
                    Box::new(Expression::Integer(15..16, 4)),
                )),
            ),
        );
        assert_eq!(parse_str("10 PRINT (2-(3+A)*4)"), answer);
    }

    #[test]
    fn test_left_associative() {
        match parse_str("1 PRINT 8-2-1*3/4") {
            Statement::Print(_, expr) => assert_eq!(expr.to_string(), "((8 - 2) - ((1 * 3) / 4))"),
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn test_no_unary_minus() {
        let e = parse_err("10 PRINT -5");
        assert_eq!(e.to_string(), "SYNTAX ERROR IN 10 (6..7); EXPECTED EXPRESSION");
    }

    #[test]
    fn test_literal_overflow() {
        let e = parse_err("10 PRINT 2147483648");
        assert_eq!(e.to_string(), "OVERFLOW IN 10 (6..16)");
        match parse_str("10 PRINT 2147483647") {
            Statement::Print(_, Expression::Integer(_, n)) => assert_eq!(n, i32::max_value()),
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn test_goto_and_if() {
        assert_eq!(parse_str("10 GOTO 40"), Statement::Goto(0..4, 40));
        assert_eq!(
            parse_str("10 IF A + 1 < B THEN 30"),
            Statement::If(0..2, Condition(3..12, "A + 1 < B".to_string()), 30)
        );
        assert_eq!(parse_err("10 IF A < B 30").to_string(), "SYNTAX ERROR IN 10 (11..11); EXPECTED THEN");
        assert_eq!(
            parse_err("10 GOTO 0").to_string(),
            "LINE NUMBER ERROR IN 10 (5..6); INVALID LINE NUMBER"
        );
        assert_eq!(
            parse_err("10 GOTO X").to_string(),
            "SYNTAX ERROR IN 10 (5..6); EXPECTED LINE NUMBER"
        );
    }

    #[test]
    fn test_trailing_tokens() {
        assert_eq!(
            parse_err("10 END 5").to_string(),
            "SYNTAX ERROR IN 10 (4..5); UNEXPECTED TOKEN"
        );
        assert_eq!(parse_str("10 REM 1 2 3"), Statement::Rem(0..3));
        assert_eq!(
            parse_str("10 INPUT N"),
            Statement::Input(0..5, Variable(6..7, "N".into()))
        );
    }

    #[test]
    fn test_commands_are_not_statements() {
        assert_eq!(
            parse_err("10 RUN").to_string(),
            "SYNTAX ERROR IN 10 (0..3); EXPECTED STATEMENT"
        );
    }

    #[test]
    fn test_direct_commands() {
        assert_eq!(command_str("RUN"), Ok(Command::Run));
        assert_eq!(command_str(" LIST "), Ok(Command::List));
        assert_eq!(command_str("CLEAR"), Ok(Command::Clear));
        assert_eq!(
            command_str("PRINT 1"),
            Ok(Command::Statement(Statement::Print(
                0..5,
                Expression::Integer(6..7, 1)
            )))
        );
        assert_eq!(
            command_str("GOTO 10").map_err(|e| e.code()),
            Err(super::super::ErrorCode::IllegalDirect)
        );
        assert_eq!(
            command_str("RUN 10").map_err(|e| e.code()),
            Err(super::super::ErrorCode::SyntaxError)
        );
        assert_eq!(
            command_str("0 PRINT 1").map_err(|e| e.code()),
            Err(super::super::ErrorCode::LineNumberError)
        );
    }

    #[test]
    fn test_condition() {
        assert_eq!(
            parse_condition("A < 2 * B", 0),
            Ok(Comparison::Less(
                Expression::Var(0..1, "A".into()),
                Expression::Multiply(
                    6..7,
                    Box::new(Expression::Integer(4..5, 2)),
                    Box::new(Expression::Var(8..9, "B".into())),
                ),
            ))
        );
        assert_eq!(
            parse_condition("1 = 1 > 0", 0).map_err(|e| e.to_string()),
            Err("SYNTAX ERROR IN (6..7); UNEXPECTED TOKEN".to_string())
        );
        assert_eq!(
            parse_condition("A + 1", 0).map_err(|e| e.to_string()),
            Err("SYNTAX ERROR; EXPECTED COMPARISON".to_string())
        );
        assert_eq!(
            parse_condition("1 = 1 > 0", 6).map_err(|e| e.to_string()),
            Err("SYNTAX ERROR IN (12..13); UNEXPECTED TOKEN".to_string())
        );
    }
}
