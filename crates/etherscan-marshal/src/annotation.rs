//! Per-field wire directives.
//!
//! A directive is a compact string of the form `name,modifier,modifier,...`
//! attached to every field a record describes. The first segment is the
//! explicit wire name (empty means "use the lower-cased field name"); the
//! remaining segments switch on encoding modifiers. Unknown modifiers are
//! dropped so newer directives keep parsing.

use std::borrow::Cow;

/// The parsed form of a field directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// Explicit wire name, if the directive names one.
    pub name: Option<&'a str>,
    /// `0x`-prefixed hex encoding.
    pub hex: bool,
    /// `YYYY-MM-DD` calendar date encoding.
    pub date: bool,
    /// Raw JSON number, or a numeric string for booleans.
    pub num: bool,
    /// Literal `"true"`/`"false"` string for booleans.
    pub str: bool,
    /// Comma-joined list carried in a single JSON string.
    pub sep: bool,
    /// Decimal with `,` thousands separators.
    pub comma: bool,
}

impl<'a> Annotation<'a> {
    /// Parse a directive string.
    ///
    /// # Arguments
    /// * `directive` - The directive, e.g. `"blockNumber,hex"`. May be empty.
    ///
    /// # Returns
    /// The parsed annotation. Parsing never fails.
    pub fn parse(directive: &'a str) -> Self {
        let mut ann = Annotation::default();
        if directive.is_empty() {
            return ann;
        }

        let mut items = directive.split(',');
        ann.name = items.next().filter(|name| !name.is_empty());

        for item in items {
            match item {
                "hex" => ann.hex = true,
                "date" => ann.date = true,
                "num" => ann.num = true,
                "str" => ann.str = true,
                "sep" => ann.sep = true,
                "comma" => ann.comma = true,
                _ => {}
            }
        }

        ann
    }

    /// Resolve the wire name of a field.
    ///
    /// # Arguments
    /// * `field` - The field's declared name, e.g. `"BlockNumber"`.
    ///
    /// # Returns
    /// The explicit name if present, otherwise `field` lower-cased.
    pub fn wire_name(&self, field: &str) -> Cow<'a, str> {
        match self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(field.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(Annotation::parse(""), Annotation::default());
    }

    #[test]
    fn test_parse_name_only() {
        let ann = Annotation::parse("blockNumber");
        assert_eq!(ann.name, Some("blockNumber"));
        assert!(!ann.hex && !ann.date && !ann.num && !ann.str && !ann.sep && !ann.comma);
    }

    #[test]
    fn test_parse_modifiers() {
        let ann = Annotation::parse("tag,hex");
        assert_eq!(ann.name, Some("tag"));
        assert!(ann.hex);

        let ann = Annotation::parse("gasUsedRatio,sep");
        assert!(ann.sep);

        let ann = Annotation::parse("networkDifficulty,comma,num,str,date");
        assert!(ann.comma && ann.num && ann.str && ann.date);
        assert!(!ann.hex && !ann.sep);
    }

    #[test]
    fn test_parse_without_name() {
        // Leading comma: no explicit name, modifiers still apply.
        let ann = Annotation::parse(",hex");
        assert_eq!(ann.name, None);
        assert!(ann.hex);
    }

    #[test]
    fn test_unknown_and_duplicate_modifiers() {
        let ann = Annotation::parse("value,hex,omitempty,hex");
        assert_eq!(ann.name, Some("value"));
        assert!(ann.hex);
        assert_eq!(ann, Annotation::parse("value,hex"));
    }

    #[test]
    fn test_wire_name() {
        assert_eq!(Annotation::parse("").wire_name("ContractAddress"), "contractaddress");
        assert_eq!(Annotation::parse("timeStamp").wire_name("Timestamp"), "timeStamp");
        assert_eq!(Annotation::parse(",date").wire_name("StartDate"), "startdate");
    }
}
