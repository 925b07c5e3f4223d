use crate::{board::GameState, movegen::all_legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts the leaves of the game tree below `state`, `depth` plies deep.
/// Won positions are leaves even above the horizon.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    fn inner(state: &GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || state.is_terminal() {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };
        all_legal_moves_into(state, state.side_to_move, buf);

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            if let Ok(child) = state.apply(mv) {
                nodes += inner(&child, depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(40); depth as usize];
    inner(state, depth, &mut layers[..])
}
