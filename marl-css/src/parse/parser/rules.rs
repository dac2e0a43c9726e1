use log::trace;

use crate::ast::Rule;
use crate::lex::TokenKind;
use crate::source::Span;

use super::at_rules::AtRuleContext;
use super::Parser;
use crate::parse::minify::remove_empty_and_duplicate_rules;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RuleContext {
    pub is_top_level: bool,
    pub parse_selectors: bool,
}

impl Parser<'_, '_> {
    pub(crate) fn parse_list_of_rules(&mut self, context: RuleContext) -> Vec<Rule> {
        trace!("parse rule list");

        let mut did_warn_about_charset = false;
        let mut did_warn_about_import = false;
        let mut rules: Vec<Rule> = Vec::new();

        // Start spans of the top-level rules, for the ordering warnings
        let mut spans: Vec<Span> = Vec::new();

        loop {
            match self.current().kind {
                TokenKind::EndOfFile | TokenKind::CloseBrace => break,

                TokenKind::Whitespace => {
                    self.advance();
                    continue;
                }

                TokenKind::AtKeyword => {
                    let first = self.current().span;
                    let rule = self.parse_at_rule(AtRuleContext::default());

                    if context.is_top_level {
                        match &rule {
                            Rule::AtCharset { .. } => {
                                if !did_warn_about_charset && !rules.is_empty() {
                                    let previous = spans[spans.len() - 1];
                                    self.errors.parse_warning(first).charset_not_first(previous);
                                    did_warn_about_charset = true;
                                }
                            }

                            Rule::AtImport { .. } => {
                                if !did_warn_about_import {
                                    for (i, before) in rules.iter().enumerate() {
                                        match before {
                                            Rule::AtCharset { .. } | Rule::AtImport { .. } => {}
                                            _ => {
                                                self.errors
                                                    .parse_warning(first)
                                                    .imports_come_first(spans[i]);
                                                did_warn_about_import = true;
                                                break;
                                            }
                                        }
                                    }
                                }
                            }

                            _ => {}
                        }
                    }

                    rules.push(rule);
                    if context.is_top_level {
                        spans.push(first);
                    }
                    continue;
                }

                // HTML comment delimiters are allowed between top-level rules
                TokenKind::Cdo | TokenKind::Cdc if context.is_top_level => {
                    self.advance();
                    continue;
                }

                _ => {}
            }

            if context.is_top_level {
                spans.push(self.current().span);
            }
            if context.parse_selectors {
                rules.push(self.parse_selector_rule());
            } else {
                rules.push(self.parse_qualified_rule_from(self.index, false));
            }
        }

        if self.options.mangle_syntax {
            rules = remove_empty_and_duplicate_rules(rules);
        }
        rules
    }

    pub(crate) fn parse_selector_rule(&mut self) -> Rule {
        let prelude_start = self.index;

        // Try the prelude as a selector list first
        if let Some(selectors) = self.parse_selector_list() {
            if self.expect(TokenKind::OpenBrace) {
                let rules = self.parse_list_of_declarations();
                self.expect(TokenKind::CloseBrace);
                return Rule::Selector { selectors, rules };
            }
        }

        // Otherwise back up and keep the prelude verbatim
        self.parse_qualified_rule_from(prelude_start, true)
    }

    pub(crate) fn parse_qualified_rule_from(
        &mut self,
        prelude_start: usize,
        is_already_invalid: bool,
    ) -> Rule {
        loop {
            match self.current().kind {
                TokenKind::OpenBrace | TokenKind::EndOfFile => break,

                TokenKind::Semicolon => {
                    // A rule without a block, likely some CSS meta-syntax
                    if !is_already_invalid {
                        self.expect(TokenKind::OpenBrace);
                    }
                    let prelude = self.convert_tokens(prelude_start..self.index);
                    self.advance();
                    return Rule::Qualified { prelude, rules: None };
                }

                _ => self.parse_component_value(),
            }
        }

        let prelude = self.convert_tokens(prelude_start..self.index);
        let mut rules = None;

        if self.eat(TokenKind::OpenBrace) {
            rules = Some(self.parse_list_of_declarations());
            self.expect(TokenKind::CloseBrace);
        } else if !is_already_invalid {
            self.expect(TokenKind::OpenBrace);
        }

        Rule::Qualified { prelude, rules }
    }
}
