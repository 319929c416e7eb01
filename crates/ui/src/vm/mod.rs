mod challenge_vm;
mod progress_vm;

pub use challenge_vm::{
    ChallengeCardVm, ChallengeDetailVm, map_challenge_cards, map_challenge_detail,
};
pub use progress_vm::{ProgressVm, map_progress};
