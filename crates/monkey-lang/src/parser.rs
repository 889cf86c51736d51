//! Pratt (operator-precedence) parser.
//!
//! `parse_expression` is the core loop: look up a prefix parser for the
//! current token, call it, then repeatedly fold in infix parsers for as
//! long as the peek token's precedence is higher than the precedence this
//! call was entered with. Because the loop condition is a strict `<`, the
//! result is left-associative.
//!
//! Structural failures (a missing closing delimiter, a token with no
//! prefix parser registered) abort the whole parse immediately via `?`,
//! matching the reference implementation's `assert`-based failure mode —
//! see `SPEC_FULL.md` §4.2.

use crate::ast::*;
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

fn precedence_of(kind: TokenKind) -> Precedence {
    use TokenKind::*;
    match kind {
        Eq | NotEq => Precedence::Equals,
        Lt | Gt => Precedence::LessGreater,
        Plus | Minus => Precedence::Sum,
        Asterisk | Slash => Precedence::Product,
        LParen => Precedence::Call,
        LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Parser {
            lexer,
            cur_token,
            peek_token,
        }
    }

    fn advance(&mut self) {
        log::trace!("parser advance: {:?} -> {:?}", self.cur_token, self.peek_token);
        std::mem::swap(&mut self.cur_token, &mut self.peek_token);
        self.peek_token = self.lexer.next_token();
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.kind)
    }

    /// Advances past the peek token if it matches `kind`, otherwise fails.
    fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "expected next token to be {:?}, got {:?} instead",
                kind, self.peek_token.kind
            )))
        }
    }

    /// Skips one optional trailing `;`.
    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.advance();
        }
        Ok(Program { statements })
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Result<LetStatement, ParseError> {
        let let_token = self.cur_token.clone();
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };
        self.expect_peek(TokenKind::Assign)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(LetStatement {
            token: let_token,
            name,
            value,
        })
    }

    fn parse_return_statement(&mut self) -> Result<ReturnStatement, ParseError> {
        let return_token = self.cur_token.clone();
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(ReturnStatement {
            token: return_token,
            value,
        })
    }

    fn parse_expression_statement(&mut self) -> Result<ExpressionStatement, ParseError> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(ExpressionStatement { token, expression })
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            left = match self.peek_token.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Asterisk
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt => {
                    self.advance();
                    self.parse_infix_expression(left)?
                }
                TokenKind::LParen => {
                    self.advance();
                    self.parse_call_expression(left)?
                }
                TokenKind::LBracket => {
                    self.advance();
                    self.parse_index_expression(left)?
                }
                _ => return Ok(left),
            };
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
        match self.cur_token.kind {
            TokenKind::Ident => Ok(Expression::Identifier(self.parse_identifier())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => Ok(Expression::StringLiteral(self.parse_string_literal())),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::True | TokenKind::False => Ok(Expression::Boolean(self.parse_boolean())),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            other => Err(ParseError::new(format!(
                "no prefix parse function for {:?} found",
                other
            ))),
        }
    }

    fn parse_identifier(&mut self) -> Identifier {
        Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }
    }

    fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let value = token.literal.parse::<i64>().map_err(|_| {
            ParseError::new(format!("could not parse {:?} as integer", token.literal))
        })?;
        Ok(Expression::IntegerLiteral(IntegerLiteral { token, value }))
    }

    fn parse_string_literal(&mut self) -> StringLiteral {
        StringLiteral {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }
    }

    fn parse_boolean(&mut self) -> BooleanLiteral {
        BooleanLiteral {
            token: self.cur_token.clone(),
            value: self.cur_is(TokenKind::True),
        }
    }

    fn parse_prefix_expression(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;
        Ok(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    fn parse_if_expression(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_block_statement(&mut self) -> Result<BlockStatement, ParseError> {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();
        self.advance();
        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.advance();
        }
        Ok(BlockStatement { token, statements })
    }

    fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;
        Ok(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Ok(params);
        }

        self.advance();
        params.push(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            params.push(Identifier {
                token: self.cur_token.clone(),
                value: self.cur_token.literal.clone(),
            });
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(params)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_array_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Ok(Expression::ArrayLiteral(ArrayLiteral { token, elements }))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        Ok(Expression::Index(IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    fn parse_hash_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expression::HashLiteral(HashLiteral { token, pairs }))
    }

    /// Shared comma-separated expression list parser used by call
    /// arguments, array literals, and (implicitly) hash keys/values.
    fn parse_expression_list(&mut self, end: TokenKind) -> Result<Vec<Expression>, ParseError> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Ok(list);
        }

        self.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Program {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        parser.parse_program().expect("program should parse")
    }

    #[test]
    fn parses_let_statements() {
        let program = parse("let x = 5; let y = true; let foobar = y;");
        assert_eq!(program.statements.len(), 3);
    }

    #[test]
    fn parses_return_statements() {
        let program = parse("return 5; return true; return foobar;");
        assert_eq!(program.statements.len(), 3);
    }

    #[test]
    fn missing_assign_in_let_is_a_parse_error() {
        let lexer = Lexer::new("let x 5;");
        let mut parser = Parser::new(lexer);
        assert!(parser.parse_program().is_err());
    }

    #[test]
    fn unknown_prefix_token_is_a_parse_error() {
        let lexer = Lexer::new(";");
        let mut parser = Parser::new(lexer);
        let err = parser.parse_program();
        // `;` alone as an expression statement has no prefix parser for the
        // token following a bare semicolon-less start, but the classic
        // failure case is a token like `)` appearing where an expression is
        // expected.
        let lexer2 = Lexer::new(")");
        let mut parser2 = Parser::new(lexer2);
        assert!(parser2.parse_program().is_err());
        let _ = err;
    }

    #[test]
    fn operator_precedence_round_trips() {
        let cases = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            (
                "a + b * c + d / e - f",
                "(((a + (b * c)) + (d / e)) - f)",
            ),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
            (
                "a * [1, 2, 3, 4][b * c] * d",
                "((a * ([1, 2, 3, 4][(b * c)])) * d)",
            ),
            (
                "add(a * b[2], b[1], 2 * [1, 2][1])",
                "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(parse(input).to_string(), expected, "input: {input}");
        }
    }

    #[test]
    fn parses_if_else_expression() {
        let program = parse("if (x < y) { x } else { y }");
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn parses_function_literal_with_parameters() {
        let program = parse("fn(x, y) { x + y; }");
        match &program.statements[0] {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::FunctionLiteral(f) => assert_eq!(f.parameters.len(), 2),
                other => panic!("expected function literal, got {:?}", other),
            },
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn parses_call_expression_arguments() {
        let program = parse("add(1, 2 * 3, 4 + 5);");
        match &program.statements[0] {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::Call(c) => assert_eq!(c.arguments.len(), 3),
                other => panic!("expected call expression, got {:?}", other),
            },
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn parses_hash_literal_with_string_keys() {
        let program = parse(r#"{"one": 1, "two": 2, "three": 3}"#);
        match &program.statements[0] {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::HashLiteral(h) => assert_eq!(h.pairs.len(), 3),
                other => panic!("expected hash literal, got {:?}", other),
            },
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn parses_empty_hash_literal() {
        let program = parse("{}");
        match &program.statements[0] {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::HashLiteral(h) => assert!(h.pairs.is_empty()),
                other => panic!("expected hash literal, got {:?}", other),
            },
            other => panic!("expected expression statement, got {:?}", other),
        }
    }
}
