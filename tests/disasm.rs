use vcsdis::addr::AddrRange;
use vcsdis::bus::{CartBus, SimBus, peek_word};
use vcsdis::dis::{DisasmLine, DisasmOptions, Disassembly, Mark, disassemble};
use vcsdis::parse::CartConfigAst;

//===========================================================================//

fn make_test_bus(size: usize, fill: u8, code: &[(usize, &[u8])]) -> CartBus {
    let mut rom = vec![fill; size];
    for &(at, bytes) in code {
        rom[at..(at + bytes.len())].copy_from_slice(bytes);
    }
    CartBus::new(rom.into_boxed_slice(), 0).unwrap()
}

fn disassemble_from_reset(bus: &CartBus) -> Disassembly {
    let options = DisasmOptions::new(peek_word(bus, 0xfffc));
    disassemble(bus, &options).unwrap()
}

fn rendered(lines: &[DisasmLine]) -> Vec<String> {
    lines.iter().map(DisasmLine::to_string).collect()
}

fn byte_count(line: &DisasmLine) -> usize {
    line.bytes.split_whitespace().count()
}

//===========================================================================//

#[test]
fn branch_discovery_and_labels() {
    let bus = make_test_bus(
        0x1000,
        0x00,
        &[
            (0x000, &[0xa2, 0x00]), // LDX #$00
            (0x002, &[0x86, 0x02]), // STX WSYNC
            (0x004, &[0xca]), // DEX
            (0x005, &[0xd0, 0xfb]), // BNE $F002
            (0x007, &[0x20, 0x10, 0xf0]), // JSR $F010
            (0x00a, &[0x4c, 0x00, 0xf0]), // JMP $F000
            (0x00d, &[0x01, 0x02, 0x03]),
            (0x010, &[0xad, 0x84, 0x02]), // LDA INTIM
            (0x013, &[0x60]), // RTS
            (0xffc, &[0x00, 0xf0, 0x00, 0xf0]),
        ],
    );
    let dis = disassemble_from_reset(&bus);
    assert_eq!(
        rendered(&dis.lines()[..11]),
        vec![
            "F000 LF000 LDX    #$00      ; 2  A2 00",
            "F002 LF002 STX    WSYNC     ; 3  86 02",
            "F004       DEX              ; 2  CA",
            "F005       BNE    LF002     ; 2  D0 FB",
            "F007       JSR    LF010     ; 6  20 10 F0",
            "F00A       JMP    LF000     ; 3  4C 00 F0",
            "F00D       .byte $01,$02,$03",
            "",
            "F010 LF010 LDA    INTIM     ; 4  AD 84 02",
            "F013       RTS              ; 6  60",
            "",
        ]
    );
    assert_eq!(dis.label_count(), 3);
    assert!(dis.marks_at(0xf00d).contains(Mark::DATA));
    assert!(!dis.is_valid_entry(0xf00d));
    assert!(dis.is_valid_entry(0xf010));
    assert!(!dis.is_valid_entry(0xf011));
}

#[test]
fn lone_return_at_window_end() {
    let bus = make_test_bus(0x1000, 0x00, &[(0xfff, &[0x60])]);
    let dis = disassemble(&bus, &DisasmOptions::new(0xffff)).unwrap();
    for addr in 0xf000..0xffff {
        let marks = dis.marks_at(addr);
        assert!(marks.contains(Mark::DATA), "${addr:04X}");
        assert!(!marks.contains(Mark::REACHABLE), "${addr:04X}");
    }
    assert!(dis.marks_at(0xffff).contains(Mark::REACHABLE));
    assert!(dis.is_valid_entry(0xffff));
    let lines = dis.lines();
    // 4095 data bytes at 16 per line, a spacer, the RTS and its spacer.
    assert_eq!(lines.len(), 256 + 3);
    assert_eq!(lines[255].text, format!(".byte {}", ["$00"; 15].join(",")));
    assert_eq!(lines[257].address, Some(0xffff));
    assert_eq!(lines[257].text, "RTS");
    assert!(lines[258].is_spacer());
}

#[test]
fn listing_without_discovery_covers_every_byte() {
    let pattern = [0xa9, 0x00, 0x8d, 0x00, 0x02, 0xea, 0x60];
    let rom: Vec<u8> = pattern.iter().copied().cycle().take(0x1000).collect();
    let bus = CartBus::new(rom.into_boxed_slice(), 0).unwrap();
    let mut options = DisasmOptions::new(0xf000);
    options.autocode = false;
    let dis = disassemble(&bus, &options).unwrap();
    let mut next_addr = 0xf000u32;
    for line in dis.lines().iter().filter(|line| !line.is_spacer()) {
        let addr = u32::from(line.address.unwrap());
        assert_eq!(addr, next_addr);
        assert!(byte_count(line) >= 1);
        next_addr = addr + byte_count(line) as u32;
    }
    assert_eq!(next_addr, 0x10000);
    assert!(dis.marks_at(0xf000).contains(Mark::VALID_ENTRY));
    assert!(!dis.marks_at(0xf001).contains(Mark::VALID_ENTRY));
    assert_eq!(dis.marks_at(0xf123) & Mark::DATA, Mark::empty());
}

#[test]
fn all_nops_without_discovery() {
    let bus = make_test_bus(0x1000, 0xea, &[]);
    let mut options = DisasmOptions::new(0xf000);
    options.autocode = false;
    let dis = disassemble(&bus, &options).unwrap();
    assert_eq!(dis.lines().len(), 0x1000);
    for (index, line) in dis.lines().iter().enumerate() {
        assert_eq!(line.address, Some(0xf000 + index as u16));
        assert_eq!(line.text, "NOP");
        assert_eq!(line.bytes, "EA");
        assert_eq!(line.cycles, Some(2));
    }
    assert_eq!(dis.label_count(), 0);
}

#[test]
fn mirrored_addresses_are_equivalent() {
    let mut marks = Vec::new();
    for hi in [0xf0u8, 0x10, 0x30, 0xb0] {
        let bus = make_test_bus(
            0x1000,
            0x00,
            &[
                (0x000, &[0x4c, 0x08, hi]), // JMP $x008
                (0x008, &[0x60]), // RTS
                (0xffc, &[0x00, 0xf0]),
            ],
        );
        let dis = disassemble_from_reset(&bus);
        let line = &dis.lines()[0];
        assert_eq!(line.text, "JMP    LF008");
        assert_eq!(line.bytes, format!("4C 08 {hi:02X}"));
        let index = dis.line_index_of(0xf008).unwrap();
        assert_eq!(dis.lines()[index].label.as_deref(), Some("LF008"));
        assert_eq!(dis.lines()[index].text, "RTS");
        let window_marks: Vec<Mark> =
            (0xf000..=0xffff).map(|addr| dis.marks_at(addr)).collect();
        marks.push(window_marks);
    }
    assert!(marks.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn absolute_instruction_truncated_by_window_end() {
    // LDA $xx34 with its opcode at the second-to-last byte.
    let bus = make_test_bus(0x1000, 0xea, &[(0xffe, &[0xad, 0x34])]);
    let mut options = DisasmOptions::new(0xf000);
    options.autocode = false;
    let dis = disassemble(&bus, &options).unwrap();
    let tail = rendered(&dis.lines()[(dis.lines().len() - 3)..]);
    assert_eq!(
        tail,
        vec![
            "FFFD       NOP              ; 2  EA",
            "FFFE       .byte $AD             AD",
            "FFFF       .byte $34             34",
        ]
    );
    assert!(dis.is_valid_entry(0xfffe));
    assert!(!dis.is_valid_entry(0xffff));

    // The same opcode at the last byte leaves nothing to read.
    let bus = make_test_bus(0x1000, 0xea, &[(0xfff, &[0xad])]);
    let dis = disassemble(&bus, &options).unwrap();
    let last = dis.lines().last().unwrap();
    assert_eq!(last.address, Some(0xffff));
    assert_eq!(last.text, ".byte $AD");
    assert_eq!(dis.lines().len(), 0x1000);
}

#[test]
fn directive_file_marks_graphics_and_data() {
    let source = "\
; sprite rows and vectors
GFX  $FF00 $FF01
DATA $FFFC $FFFF
";
    let bus = make_test_bus(
        0x1000,
        0xea,
        &[
            (0xf00, &[0x3c, 0x81]),
            (0xffc, &[0x00, 0xf0, 0x00, 0xf0]),
        ],
    );
    let mut options = DisasmOptions::new(peek_word(&bus, 0xfffc));
    options.autocode = false;
    CartConfigAst::parse_source(source).unwrap().apply(&mut options);
    let dis = disassemble(&bus, &options).unwrap();
    let index = dis.line_index_of(0xff00).unwrap();
    assert_eq!(
        rendered(&dis.lines()[index..(index + 3)]),
        vec![
            "FF00       .byte $3C ; |  XXXX  |      3C",
            "FF01       .byte $81 ; |X      X|      81",
            "FF02       NOP              ; 2  EA",
        ]
    );
    let index = dis.line_index_of(0xfffc).unwrap();
    assert_eq!(dis.lines()[index].text, ".byte $00,$F0,$00,$F0");
    assert!(dis.lines()[index + 1].is_spacer());
    assert_eq!(dis.lines().len(), index + 2);
}

#[test]
fn graphics_stop_discovery() {
    let bus = make_test_bus(
        0x1000,
        0x00,
        &[
            (0x000, &[0xa9, 0x00]), // LDA #$00
            (0x002, &[0x60; 8]),
            (0x00a, &[0x20, 0x00, 0xf5]), // JSR $F500
            (0x500, &[0x60]), // RTS
        ],
    );
    let mut options = DisasmOptions::new(0xf000);
    options.gfx.push(AddrRange::with_bounds(0xf002, 0xf009).unwrap());
    let dis = disassemble(&bus, &options).unwrap();
    let lines = dis.lines();
    assert_eq!(lines[0].text, "LDA    #$00");
    assert_eq!(lines[1].text, ".byte $60 ; | XX     |");
    assert_eq!(lines[9].address, Some(0xf00a));
    assert!(lines[9].text.starts_with(".byte $20,$00,$F5,"));
    assert!(!dis.marks_at(0xf00a).contains(Mark::REACHABLE));
    assert!(!dis.marks_at(0xf500).contains(Mark::REACHABLE));
    assert_eq!(dis.label_count(), 0);
}

#[test]
fn undocumented_opcodes_are_listed_as_bytes() {
    let bus = make_test_bus(
        0x1000,
        0x00,
        &[(0x000, &[0xa7, 0x80, 0x02]), (0xffc, &[0x00, 0xf0])],
    );
    let dis = disassemble_from_reset(&bus);
    let lines = dis.lines();
    assert_eq!(lines[0].text, ".byte $A7 ; .LAX");
    assert_eq!(lines[0].bytes, "A7");
    assert_eq!(lines[1].address, Some(0xf001));
    assert_eq!(lines[1].text, ".byte $80 ; .NOOP");
    assert_eq!(lines[1].bytes, "80");
    assert_eq!(lines[2].address, Some(0xf002));
    assert_eq!(lines[2].text, ".byte $02 ; .JAM");
    for addr in 0xf000..=0xf002 {
        assert!(dis.is_valid_entry(addr), "${addr:04X}");
    }
}

#[test]
fn two_kilobyte_cartridge() {
    let bus = make_test_bus(
        0x800,
        0x00,
        &[(0x000, &[0x4c, 0x00, 0xf8]), (0x7fc, &[0x00, 0xf8])],
    );
    let mut options = DisasmOptions::new(peek_word(&bus, 0xfffc));
    options.bank_size = bus.bank_size();
    let dis = disassemble(&bus, &options).unwrap();
    assert_eq!(dis.window().base(), 0xf000);
    assert_eq!(dis.window().size(), 0x800);
    assert_eq!(dis.lines()[0].text, "JMP    LF000");
    assert_eq!(dis.lines()[0].label.as_deref(), Some("LF000"));
    assert!(dis.marks_at(0xf003).contains(Mark::DATA));
    assert!(bus.description().starts_with("2kB cartridge"));
}

//===========================================================================//
