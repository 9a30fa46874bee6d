//! Parser for circuit descriptions.

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::components::{ComponentKind, ReactanceMode};
use crate::error::{PhasorError, Result};

/// Parser for circuit descriptions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire circuit description.
    pub fn parse(&mut self) -> Result<CircuitAst> {
        let mut ast = CircuitAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Identifier => {
                    let component = self.parse_component()?;
                    ast.components.push(component);
                }
                _ => {
                    return Err(PhasorError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.end_of_line()?;
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(PhasorError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn expect_value(&mut self) -> Result<f64> {
        let tok = self.expect(TokenKind::Number)?;
        parse_value(&tok.text)
            .ok_or_else(|| PhasorError::parse(tok.line, format!("invalid number: {}", tok.text)))
    }

    fn end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(PhasorError::parse(
                self.current.line,
                format!("unexpected trailing token: {:?}", self.current.text),
            )),
        }
    }

    fn parse_directive(&mut self, ast: &mut CircuitAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".freq" | ".frequency" => {
                let f = self.expect_value()?;
                if f < 0.0 {
                    return Err(PhasorError::parse(line, "frequency cannot be negative"));
                }
                ast.frequency_hz = Some(f);
            }
            ".mode" => {
                let mode = self.expect(TokenKind::Identifier)?;
                let mode: ReactanceMode = mode
                    .text
                    .parse()
                    .map_err(|_| PhasorError::parse(line, format!("unknown mode: {}", mode.text)))?;
                ast.reactance_mode = Some(mode);
            }
            ".wire" => {
                let from = self.parse_terminal()?;
                let to = self.parse_terminal()?;
                ast.wires.push(WireDef { from, to, line });
            }
            _ => {
                return Err(PhasorError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_terminal(&mut self) -> Result<TerminalRef> {
        let component = self.expect(TokenKind::Identifier)?.text;
        self.expect(TokenKind::Colon)?;
        let tok = self.expect(TokenKind::Number)?;
        let node = match tok.text.as_str() {
            "1" => 1,
            "2" => 2,
            _ => {
                return Err(PhasorError::parse(
                    tok.line,
                    format!("terminal must be 1 or 2, got {}", tok.text),
                ))
            }
        };
        Ok(TerminalRef { component, node })
    }

    fn parse_component(&mut self) -> Result<ComponentDef> {
        let name = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let kind = ComponentKind::from_name_prefix(&name).ok_or_else(|| {
            PhasorError::UnknownComponentType {
                component_type: name.clone(),
                line,
            }
        })?;

        let mut value = None;
        let mut phase = None;

        if self.current.kind == TokenKind::Number {
            value = Some(self.expect_value()?);
        }

        // key=value parameters until end of line
        while self.current.kind == TokenKind::Identifier {
            let key = self.current.text.to_lowercase();
            self.advance()?;
            self.expect(TokenKind::Equals)?;
            let v = self.expect_value()?;
            match key.as_str() {
                "value" => value = Some(v),
                "phase" if kind.has_phase() => phase = Some(v),
                "phase" => {
                    return Err(PhasorError::parse(
                        line,
                        format!("'{}' is a {} and takes no phase", name, kind),
                    ))
                }
                _ => {
                    return Err(PhasorError::parse(
                        line,
                        format!("unknown parameter '{}' for '{}'", key, name),
                    ))
                }
            }
        }

        Ok(ComponentDef {
            kind,
            name,
            value,
            phase,
            line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<CircuitAst> {
        super::super::parse(input)
    }

    #[test]
    fn test_parse_components() {
        let ast = parse("R1 10k\nC1 -2\nVAC1 120 phase=30\nIDC1\n").unwrap();
        assert_eq!(ast.components.len(), 4);
        assert_eq!(ast.components[0].kind, ComponentKind::Resistor);
        assert_eq!(ast.components[0].value, Some(10_000.0));
        assert_eq!(ast.components[1].value, Some(-2.0));
        assert_eq!(ast.components[2].kind, ComponentKind::VoltageSourceAc);
        assert_eq!(ast.components[2].phase, Some(30.0));
        assert_eq!(ast.components[3].kind, ComponentKind::CurrentSourceDc);
        assert_eq!(ast.components[3].value, None);
    }

    #[test]
    fn test_parse_directives() {
        let ast = parse(".freq 50\n.mode physical\nR1 1\nL1 1m\n.wire R1:2 L1:1").unwrap();
        assert_eq!(ast.frequency_hz, Some(50.0));
        assert_eq!(ast.reactance_mode, Some(ReactanceMode::FrequencyAware));
        assert_eq!(ast.wires.len(), 1);
        assert_eq!(ast.wires[0].from.component, "R1");
        assert_eq!(ast.wires[0].from.node, 2);
        assert_eq!(ast.wires[0].to.node, 1);
        let config = ast.solver_config();
        assert_eq!(config.frequency_hz, 50.0);
    }

    #[test]
    fn test_parse_with_comments() {
        let input = "# a series loop\nR1 10 ; load\n\nVAC1 120\n";
        let ast = parse(input).unwrap();
        assert_eq!(ast.components.len(), 2);
    }

    #[test]
    fn test_phase_on_resistor_rejected() {
        assert!(matches!(
            parse("R1 10 phase=5"),
            Err(PhasorError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_component_type() {
        assert!(matches!(
            parse("R1 10\nQ1 3"),
            Err(PhasorError::UnknownComponentType { line: 2, .. })
        ));
    }

    #[test]
    fn test_bad_terminal_number() {
        assert!(parse("R1 1\nL1 1\n.wire R1:3 L1:1").is_err());
    }
}
