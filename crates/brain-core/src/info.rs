//! Content for the info panel opened by clicking a hemisphere.

use crate::scene::{BrainNodes, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrainPart {
    FrontalLobe,
    ParietalLobe,
}

#[derive(Clone, Copy, Debug)]
pub struct PartInfo {
    pub title: &'static str,
    pub content: &'static str,
    pub image: &'static str,
}

impl BrainPart {
    pub fn info(self) -> PartInfo {
        match self {
            BrainPart::FrontalLobe => PartInfo {
                title: "Frontal Lobe",
                content: "The frontal lobe sits behind the forehead. It plans and \
                          sequences movement, holds things in working memory and \
                          keeps behaviour in check.",
                image: "frontal-lobe.png",
            },
            BrainPart::ParietalLobe => PartInfo {
                title: "Parietal Lobe",
                content: "The parietal lobe sits behind the frontal lobe. It merges \
                          touch, position and visual cues into a map of the body \
                          and the space around it.",
                image: "parietal-lobe.png",
            },
        }
    }
}

impl BrainNodes {
    /// Part shown for a click on the given hemisphere group.
    pub fn part_for(&self, group: NodeId) -> Option<BrainPart> {
        if group == self.left_hemisphere {
            Some(BrainPart::FrontalLobe)
        } else if group == self.right_hemisphere {
            Some(BrainPart::ParietalLobe)
        } else {
            None
        }
    }
}

/// Where a click on the info overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelClick {
    CloseButton,
    /// The dimmed overlay itself, outside the panel.
    Backdrop,
    /// Anything inside the panel, bubbled up to the overlay.
    Content,
}

/// Open/closed state of the info panel and which part it shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InfoPanel {
    part: Option<BrainPart>,
}

impl InfoPanel {
    pub fn show(&mut self, part: BrainPart) -> PartInfo {
        self.part = Some(part);
        part.info()
    }

    pub fn hide(&mut self) -> bool {
        self.part.take().is_some()
    }

    /// Returns `true` when the click closed an open panel.
    pub fn click(&mut self, at: PanelClick) -> bool {
        match at {
            PanelClick::CloseButton | PanelClick::Backdrop => self.hide(),
            PanelClick::Content => false,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.part.is_some()
    }

    #[inline]
    pub fn part(&self) -> Option<BrainPart> {
        self.part
    }
}
