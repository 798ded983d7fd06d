use brain_core::{InfoPanel, NodeId, Toaster};

/// Page-side interaction state shared by the pointer handlers and the frame
/// loop.
#[derive(Default)]
pub struct UiState {
    pub toaster: Toaster,
    pub info: InfoPanel,
    pub hover: Option<NodeId>,
}
