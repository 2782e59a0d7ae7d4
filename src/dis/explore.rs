//! Control-flow exploration: discovers which bytes of the window are
//! reachable as code.

use super::decode::{Decoded, decode_at};
use super::labels::{LabelMap, Mark};
use crate::bus::SimBus;
use std::collections::VecDeque;

//===========================================================================//

/// Walks the window breadth-first from the given entry offsets, marking
/// every reached instruction stream `REACHABLE`, every operand target
/// `REFERENCED`, and finally every byte never reached `DATA`.  Returns the
/// number of blocks explored.
pub(super) fn explore(
    bus: &dyn SimBus,
    map: &mut LabelMap,
    seeds: &[usize],
) -> usize {
    let mut queue = VecDeque::with_capacity(seeds.len());
    for &seed in seeds {
        if !map.has(seed, Mark::REACHABLE) {
            map.mark_offset(seed, Mark::REACHABLE);
            queue.push_back(seed);
        }
    }
    let mut blocks = 0;
    while let Some(begin) = queue.pop_front() {
        let window = map.window();
        let Some(end) = explore_block(bus, map, begin, &mut queue) else {
            log::trace!(
                "${:04X} is pre-marked; not exploring",
                window.addr_at(begin)
            );
            continue;
        };
        log::trace!(
            "explored block ${:04X}-${:04X}",
            window.addr_at(begin),
            window.addr_at(end)
        );
        for offset in begin..=end {
            map.mark_offset(offset, Mark::REACHABLE);
        }
        blocks += 1;
    }
    let data = map.mark_unreachable_as_data();
    log::debug!("explored {blocks} block(s); {data} byte(s) left as data");
    blocks
}

/// Decodes linearly from `begin` until a terminator, a pre-marked `GFX` or
/// `DATA` byte, or the end of the window, queueing newly discovered branch
/// targets.  Returns the last offset consumed, or `None` if `begin` itself
/// is pre-marked.
fn explore_block(
    bus: &dyn SimBus,
    map: &mut LabelMap,
    begin: usize,
    queue: &mut VecDeque<usize>,
) -> Option<usize> {
    let window = map.window();
    let last = window.size() - 1;
    let mut offset = begin;
    while offset <= last {
        if map.get(offset).intersects(Mark::GFX | Mark::DATA) {
            return if offset > begin { Some(offset - 1) } else { None };
        }
        let instruction = match decode_at(bus, window, offset) {
            Decoded::Complete(instruction) => instruction,
            Decoded::Truncated { .. } => return Some(last),
        };
        let pc = window.addr_at(offset);
        if let Some(target) = instruction.operand.target(pc) {
            let resolution = map.resolve(target, Mark::REFERENCED);
            if instruction.follows_target()
                && let Some(dest) = resolution.offset()
                && !map.has(dest, Mark::REACHABLE)
            {
                log::trace!(
                    "queueing ${:04X} from ${pc:04X}",
                    window.addr_at(dest)
                );
                map.mark_offset(dest, Mark::REACHABLE);
                queue.push_back(dest);
            }
        }
        let end = offset + instruction.size() - 1;
        if instruction.operation.is_terminator() {
            return Some(end);
        }
        offset = end + 1;
    }
    Some(last)
}

//===========================================================================//


//===========================================================================//
