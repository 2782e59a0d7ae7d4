use super::decode::{Decoded, decode_at};
use super::labels::{LabelMap, Mark};
use crate::bus::SimBus;

//===========================================================================//

/// Walks the window from its base the same way the formatter will, marking
/// the start of every listed instruction `VALID_ENTRY` and every operand
/// target `REFERENCED`.  Graphics bytes and data runs are stepped over
/// without being marked.  Returns the number of instruction starts found.
pub(super) fn validate(bus: &dyn SimBus, map: &mut LabelMap) -> usize {
    let window = map.window();
    let mut entries = 0;
    let mut offset = 0;
    while offset < window.size() {
        let marks = map.get(offset);
        if marks.contains(Mark::GFX) {
            offset += 1;
            continue;
        }
        if marks.contains(Mark::DATA) {
            offset += map.data_run_len(offset);
            continue;
        }
        map.mark_offset(offset, Mark::VALID_ENTRY);
        entries += 1;
        match decode_at(bus, window, offset) {
            Decoded::Complete(instruction) => {
                let pc = window.addr_at(offset);
                if let Some(target) = instruction.operand.target(pc) {
                    map.resolve(target, Mark::REFERENCED);
                }
                offset += instruction.size();
            }
            Decoded::Truncated { .. } => break,
        }
    }
    log::debug!("found {entries} instruction start(s)");
    entries
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::addr::BankWindow;
    use crate::bus::CartBus;
    use crate::dis::labels::{LabelMap, Mark};

    fn make_test_bus(code: &[u8]) -> CartBus {
        let mut rom = vec![0xeau8; 0x1000];
        rom[..code.len()].copy_from_slice(code);
        CartBus::new(rom.into_boxed_slice(), 0).unwrap()
    }

    fn make_map() -> LabelMap {
        LabelMap::new(BankWindow::containing(0xf000, 0x1000).unwrap()).unwrap()
    }

    #[test]
    fn marks_instruction_starts() {
        // LDA #$00 ; STA WSYNC ; JMP $F000 ; NOP...
        let bus = make_test_bus(&[0xa9, 0x00, 0x85, 0x02, 0x4c, 0x00, 0xf0]);
        let mut map = make_map();
        assert_eq!(validate(&bus, &mut map), 3 + (0x1000 - 7));
        for offset in [0, 2, 4, 7, 8, 0xfff] {
            assert!(map.has(offset, Mark::VALID_ENTRY), "${offset:03X}");
        }
        for offset in [1, 3, 5, 6] {
            assert!(!map.has(offset, Mark::VALID_ENTRY), "${offset:03X}");
        }
        assert!(map.has(0, Mark::REFERENCED));
    }

    #[test]
    fn skips_data_and_gfx() {
        let bus = make_test_bus(&[]);
        let mut map = make_map();
        for offset in 0..8 {
            map.mark_offset(offset, Mark::DATA);
        }
        map.mark_offset(3, Mark::REFERENCED);
        map.mark_offset(8, Mark::GFX);
        validate(&bus, &mut map);
        for offset in 0..9 {
            assert!(!map.has(offset, Mark::VALID_ENTRY), "${offset:03X}");
        }
        assert!(map.has(9, Mark::VALID_ENTRY));
    }

    #[test]
    fn stops_at_truncated_instruction() {
        let mut rom = vec![0xeau8; 0x1000];
        rom[0xffe] = 0xad;
        let bus = CartBus::new(rom.into_boxed_slice(), 0).unwrap();
        let mut map = make_map();
        validate(&bus, &mut map);
        assert!(map.has(0xffe, Mark::VALID_ENTRY));
        assert!(!map.has(0xfff, Mark::VALID_ENTRY));
    }
}

//===========================================================================//
