//! pest grammar binding
//!
//! The grammar lives in `gpt.pest`. Builders in the sibling modules walk the
//! generic parse tree produced here and assemble AST nodes.

use crate::error::ParseError;
use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "gpt.pest"]
pub(crate) struct GptGrammar;

/// Parse `source` as a whole file and return the top-level `feature` pair
pub(crate) fn parse_file(source: &str) -> Result<Pair<'_, Rule>, ParseError> {
    let mut pairs = GptGrammar::parse(Rule::file, source).map_err(syntax_error)?;

    let file = pairs.next().ok_or_else(|| ParseError::missing("file"))?;
    file.into_inner()
        .find(|pair| pair.as_rule() == Rule::feature)
        .ok_or_else(|| ParseError::missing("feature"))
}

fn syntax_error(err: pest::error::Error<Rule>) -> ParseError {
    let (line, column) = match err.line_col {
        LineColLocation::Pos(pos) => pos,
        LineColLocation::Span(start, _) => start,
    };
    ParseError::Syntax {
        message: err.to_string(),
        line,
        column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_are_whitespace() {
        let source = "// header\n[ /* inline */ var x: bool // trailing\n ]";
        assert!(GptGrammar::parse(Rule::file, source).is_ok());
    }

    #[test]
    fn test_number_forms() {
        for text in ["5", "-5", "2.75", "-0.5", "Inf", "-Inf", "- Inf"] {
            let parsed = GptGrammar::parse(Rule::number, text).unwrap();
            assert_eq!(parsed.as_str(), text, "number {text}");
        }
    }

    #[test]
    fn test_keywords_need_boundary() {
        assert!(GptGrammar::parse(Rule::bool_lit, "trueish").is_err());
        assert!(GptGrammar::parse(Rule::interval_op, "inside").is_err());
        assert!(GptGrammar::parse(Rule::kw_var, "variable").is_err());
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let err = parse_file("[\n  var x bool\n]").unwrap_err();
        match err {
            ParseError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected syntax error, got {other:?}"),
        }
    }
}
