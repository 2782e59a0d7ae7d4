use std::fmt;

//===========================================================================//

const TEXT_WIDTH: usize = 16;

/// One record of a disassembly listing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisasmLine {
    /// The absolute address of the first byte this record lists.  This is
    /// `None` for continuation and spacer records.
    pub address: Option<u16>,
    /// The symbolic label for `address`, if the address is referenced.
    pub label: Option<String>,
    /// The mnemonic and operand, or a byte directive.  Empty for spacers.
    pub text: String,
    /// The raw bytes covered by this record, as space-separated hex pairs.
    pub bytes: String,
    /// The base cycle count, for instructions.
    pub cycles: Option<u8>,
}

impl DisasmLine {
    /// Returns a blank record used to visually separate blocks.
    pub fn spacer() -> DisasmLine {
        DisasmLine::default()
    }

    /// Returns true if this record carries no content.
    pub fn is_spacer(&self) -> bool {
        self.address.is_none() && self.text.is_empty()
    }
}

impl fmt::Display for DisasmLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_spacer() {
            return Ok(());
        }
        let mut line = match self.address {
            Some(addr) => format!("{addr:04X} "),
            None => "     ".to_string(),
        };
        let label = self.label.as_deref().unwrap_or("");
        line.push_str(&format!("{label:<5} {:<TEXT_WIDTH$}", self.text));
        if let Some(cycles) = self.cycles {
            line.push_str(&format!(" ;{cycles:>2}"));
        } else if !self.bytes.is_empty() {
            line.push_str("    ");
        }
        if !self.bytes.is_empty() {
            line.push_str("  ");
            line.push_str(&self.bytes);
        }
        f.write_str(line.trim_end())
    }
}

/// Formats bytes as space-separated uppercase hex pairs.
pub(super) fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<String>>()
        .join(" ")
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{DisasmLine, hex_bytes};

    #[test]
    fn display_instruction() {
        let line = DisasmLine {
            address: Some(0xf000),
            label: Some("LF000".to_string()),
            text: "LDA    #$00".to_string(),
            bytes: "A9 00".to_string(),
            cycles: Some(2),
        };
        assert_eq!(
            line.to_string(),
            "F000 LF000 LDA    #$00      ; 2  A9 00"
        );
    }

    #[test]
    fn display_without_label() {
        let line = DisasmLine {
            address: Some(0xf002),
            label: None,
            text: "STA    WSYNC".to_string(),
            bytes: "85 02".to_string(),
            cycles: Some(3),
        };
        assert_eq!(
            line.to_string(),
            "F002       STA    WSYNC     ; 3  85 02"
        );
    }

    #[test]
    fn display_byte() {
        let line = DisasmLine {
            address: Some(0xfffe),
            label: None,
            text: ".byte $AD".to_string(),
            bytes: "AD".to_string(),
            cycles: None,
        };
        assert_eq!(line.to_string(), "FFFE       .byte $AD             AD");
    }

    #[test]
    fn display_data() {
        let line = DisasmLine {
            address: None,
            label: None,
            text: ".byte $01,$02".to_string(),
            bytes: String::new(),
            cycles: None,
        };
        assert_eq!(line.to_string(), "           .byte $01,$02");
    }

    #[test]
    fn display_spacer() {
        assert!(DisasmLine::spacer().is_spacer());
        assert_eq!(DisasmLine::spacer().to_string(), "");
    }

    #[test]
    fn hex_pairs() {
        assert_eq!(hex_bytes(&[]), "");
        assert_eq!(hex_bytes(&[0x4c, 0x00, 0xf0]), "4C 00 F0");
    }
}

//===========================================================================//
