use super::*;
use rand::seq::IndexedRandom;
use ttt_core::Index;
use ttt_wire::ServerCommand;

/// CPU seat that plays a random empty cell.
#[derive(Debug, Default)]
pub struct Fish;

#[async_trait::async_trait]
impl Seat for Fish {
    async fn decide(&mut self, view: &View) -> Option<Index> {
        let ref mut rng = rand::rng();
        view.board
            .vacancies()
            .collect::<Vec<_>>()
            .choose(rng)
            .copied()
    }
    async fn notify(&mut self, _: &ServerCommand) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_board::Board;

    #[tokio::test]
    async fn fish_plays_empty_cells() {
        let mut view = View {
            board: Board::try_from("XOXOX O X").unwrap(),
            ..View::default()
        };
        for _ in 0..20 {
            assert!(matches!(Fish.decide(&view).await, Some(5) | Some(7)));
        }
        view.board = Board::try_from("XOXOXOOXO").unwrap();
        assert_eq!(Fish.decide(&view).await, None);
    }
}
