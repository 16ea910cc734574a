//! Declarations: `fun`, `class`, `object` and `enum`.

use std::rc::Rc;

use oahu_ir::ast::{ClassDecl, EnumDecl, EnumEntry, FunDecl, Param, Stmt, StmtKind};
use oahu_ir::{Name, Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `fun [@] name [(params)] ({ body } | = expr | <none>)`
    pub(crate) fn parse_fun(&mut self) -> Result<Stmt, ParseError> {
        let span = self.expect(&TokenKind::Fun)?.span;
        let linked = self.eat(&TokenKind::At)?;
        let (name, _) = self.declared_name()?;

        let params = if self.eat(&TokenKind::LParen)? {
            self.parse_params(false)?
        } else {
            Vec::new()
        };

        let body = if self.check(&TokenKind::LBrace) {
            self.parse_stmt_body()?
        } else if self.check(&TokenKind::Eq) {
            let eq = self.advance()?.span;
            self.skip_newlines()?;
            Stmt::new(eq, StmtKind::Return(self.parse_expr()?))
        } else {
            Stmt::empty()
        };

        let decl = FunDecl {
            span,
            path: self.link_path(name),
            linked,
            name,
            params,
            body,
        };

        Ok(Stmt::new(span, StmtKind::Fun(Rc::new(decl))))
    }

    /// Parameters after `(`, through the closing `)`.
    ///
    /// Function parameters: `[mut] [*] name [= default]`. Class parameters
    /// may additionally start with `let` or `var` to become members.
    pub(crate) fn parse_params(&mut self, class: bool) -> Result<Vec<Param>, ParseError> {
        let mut params: Vec<Param> = Vec::new();
        self.skip_newlines()?;

        if self.eat(&TokenKind::RParen)? {
            return Ok(params);
        }

        loop {
            if let Some(previous) = params.last().filter(|p| p.variadic) {
                let text = self.interner.lookup(previous.name);
                return Err(ParseError::misplaced_variadic(text, previous.span));
            }
            params.push(self.parse_param(class)?);
            if !self.eat_line(&TokenKind::Comma)? {
                break;
            }
        }

        self.skip_newlines()?;
        self.expect(&TokenKind::RParen)?;
        Ok(params)
    }

    fn parse_param(&mut self, class: bool) -> Result<Param, ParseError> {
        let start = self.current_span();

        let constant = if class && self.eat(&TokenKind::Let)? {
            Some(true)
        } else if class && self.eat(&TokenKind::Var)? {
            Some(false)
        } else {
            None
        };

        let mutable = self.eat(&TokenKind::Mut)?;
        let variadic = self.eat(&TokenKind::Star)?;
        let (name, name_span) = self.declared_name()?;

        if mutable && variadic {
            let text = self.interner.lookup(name);
            return Err(ParseError::mutable_variadic(text, name_span));
        }

        let default = if self.eat(&TokenKind::Eq)? {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(Param {
            span: start.range_to(name_span),
            constant,
            mutable,
            variadic,
            name,
            default,
        })
    }

    /// `class [@] Name [(params)] [: base] [{ stmts }]`
    pub(crate) fn parse_class(&mut self) -> Result<Stmt, ParseError> {
        let span = self.expect(&TokenKind::Class)?.span;
        let linked = self.eat(&TokenKind::At)?;
        let (name, _) = self.declared_name()?;

        let params = if self.eat(&TokenKind::LParen)? {
            self.parse_params(true)?
        } else {
            Vec::new()
        };

        let decl = self.parse_class_rest(span, linked, name, params)?;
        Ok(Stmt::new(span, StmtKind::Class(Rc::new(decl))))
    }

    /// `object Name [: base] { stmts }`
    pub(crate) fn parse_object(&mut self) -> Result<Stmt, ParseError> {
        let span = self.expect(&TokenKind::Object)?.span;
        let (name, _) = self.declared_name()?;

        let decl = self.parse_class_rest(span, false, name, Vec::new())?;
        Ok(Stmt::new(span, StmtKind::Object(Rc::new(decl))))
    }

    /// The optional base and initializer block shared by classes and objects.
    fn parse_class_rest(
        &mut self,
        span: Span,
        linked: bool,
        name: Name,
        params: Vec<Param>,
    ) -> Result<ClassDecl, ParseError> {
        let base = if self.eat(&TokenKind::Colon)? {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let init = if self.eat_line(&TokenKind::LBrace)? {
            self.class_path.push(name);
            let stmts = self.parse_stmts_until_brace();
            self.class_path.pop();
            stmts?
        } else {
            Vec::new()
        };

        Ok(ClassDecl {
            span,
            path: self.interner.lookup(name).to_string(),
            linked,
            name,
            params,
            base,
            init,
        })
    }

    /// `enum Name [(params)] { Entry[(args)] (, | line end) ... }`
    pub(crate) fn parse_enum(&mut self) -> Result<Stmt, ParseError> {
        let span = self.expect(&TokenKind::Enum)?.span;
        let (name, _) = self.declared_name()?;

        let params = if self.eat(&TokenKind::LParen)? {
            self.parse_params(true)?
        } else {
            Vec::new()
        };

        self.expect_line(&TokenKind::LBrace)?;

        let mut entries = Vec::new();
        while !self.eat(&TokenKind::RBrace)? {
            let (entry, entry_span) = self.declared_name()?;
            let args = if self.eat(&TokenKind::LParen)? {
                self.parse_call_args()?
            } else {
                Vec::new()
            };

            entries.push(EnumEntry {
                span: entry_span,
                name: entry,
                args,
                ordinal: entries.len(),
            });

            self.eat(&TokenKind::Comma)?;
            self.skip_newlines()?;
        }

        let class = Rc::new(ClassDecl {
            span,
            path: self.interner.lookup(name).to_string(),
            linked: false,
            name,
            params,
            base: None,
            init: Vec::new(),
        });

        Ok(Stmt::new(
            span,
            StmtKind::Enum(Rc::new(EnumDecl {
                span,
                class,
                entries,
            })),
        ))
    }
}
