/// The five cursor kinds in the pack, in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Arrow,
    Hand,
    Busy,
    IBeam,
    Move,
}

impl IconKind {
    pub const ALL: [IconKind; 5] = [
        IconKind::Arrow,
        IconKind::Hand,
        IconKind::Busy,
        IconKind::IBeam,
        IconKind::Move,
    ];

    /// Output filenames, one group per rendered frame. Every name in a group
    /// receives the same image: the hand frame is written a second time as
    /// `mlp_select.png` so a dedicated selection cursor file exists.
    pub fn outputs(self) -> &'static [&'static [&'static str]] {
        match self {
            IconKind::Arrow => &[&["mlp_arrow.png"]],
            IconKind::Hand => &[&["mlp_hand.png", "mlp_select.png"]],
            IconKind::Busy => &[&["mlp_busy_1.png"], &["mlp_busy_2.png"]],
            IconKind::IBeam => &[&["mlp_ibeam.png"]],
            IconKind::Move => &[&["mlp_move.png"]],
        }
    }

    pub fn frame_count(self) -> usize {
        self.outputs().len()
    }

    /// Pixel that acts as the pointer tip when the image is registered as a
    /// live cursor. The horn cursors share (2, 2) so the tip stays put across
    /// cursor states; everything else anchors on the canvas center.
    pub fn hotspot(self) -> (u32, u32) {
        match self {
            IconKind::Arrow | IconKind::Hand => (2, 2),
            IconKind::Busy | IconKind::IBeam | IconKind::Move => (16, 16),
        }
    }

    /// Frame delay recorded in the manifest; only the busy spinner animates.
    pub fn frame_delay_ms(self) -> u32 {
        match self {
            IconKind::Busy => 120,
            _ => 0,
        }
    }
}
