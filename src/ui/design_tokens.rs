// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the demo window: palette, spacing and typography.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const WHITE: Color = Color::WHITE;
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

pub mod typography {
    pub const BODY: f32 = 14.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }
}
