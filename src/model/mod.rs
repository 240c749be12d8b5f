pub mod config {
    pub use predation_core::config::*;
}
pub mod engine {
    pub use predation_core::engine::*;
}
pub mod grid {
    pub use predation_core::grid::*;
}
pub mod lifecycle {
    pub use predation_core::lifecycle::*;
}
pub mod metrics {
    pub use predation_core::metrics::*;
}
pub mod movement {
    pub use predation_core::movement::*;
}
pub mod render {
    pub use predation_core::render::*;
}
pub mod spawn {
    pub use predation_core::spawn::*;
}
pub mod stats {
    pub use predation_core::stats::*;
}
pub mod termination {
    pub use predation_core::termination::*;
}
pub mod error {
    pub use predation_core::error::*;
}

pub mod state {
    pub use predation_data::*;
}
