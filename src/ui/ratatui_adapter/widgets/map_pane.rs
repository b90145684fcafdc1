//! Map pane widget: world outline plus labelled pins
//!
//! Draws a [`MapScene`] on a braille canvas whose bounds come from the scene
//! camera. Pins outside the camera region are counted in the title instead of
//! being drawn.

use crate::config::MapDetail;
use crate::map::MapScene;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Widget,
        canvas::{Canvas, Map, MapResolution},
    },
};

/// Glyph printed at each pin location
pub const PIN: &str = "●";

/// Map pane widget
pub struct MapPane<'a> {
    scene: &'a MapScene,
    theme: &'a Theme,
    detail: MapDetail,
    title: &'a str,
}

impl<'a> MapPane<'a> {
    #[must_use]
    pub const fn new(scene: &'a MapScene, theme: &'a Theme) -> Self {
        Self {
            scene,
            theme,
            detail: MapDetail::High,
            title: "Map",
        }
    }

    /// Coastline resolution
    #[must_use]
    pub const fn detail(mut self, detail: MapDetail) -> Self {
        self.detail = detail;
        self
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    const fn resolution(&self) -> MapResolution {
        match self.detail {
            MapDetail::Low => MapResolution::Low,
            MapDetail::High => MapResolution::High,
        }
    }

    fn block_title(&self) -> String {
        let visible = self.scene.visible_annotations().count();
        let hidden = self.scene.annotations.len() - visible;
        let noun = if visible == 1 { "pin" } else { "pins" };
        if hidden == 0 {
            format!(" {} ({visible} {noun}) ", self.title)
        } else {
            format!(" {} ({visible} {noun}, {hidden} off-screen) ", self.title)
        }
    }
}

impl Widget for MapPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.block_title());

        let (x_bounds, y_bounds) = self.scene.camera.bounds();
        let resolution = self.resolution();
        let outline = self.theme.map_outline;
        let pin_style = self.theme.pin_style();
        let scene = self.scene;

        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                ctx.draw(&Map {
                    resolution,
                    color: outline,
                });
                ctx.layer();
                for annotation in scene.visible_annotations() {
                    ctx.print(
                        annotation.coordinate.longitude,
                        annotation.coordinate.latitude,
                        Line::styled(format!("{PIN} {}", annotation.label), pin_style),
                    );
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Annotation, CameraPosition, Coordinate, Span};

    fn scene_with(pins: &[(f64, f64)]) -> MapScene {
        let camera = CameraPosition::region(Coordinate::new(10.0, 10.0), Span::uniform(2.0));
        let annotations = pins
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| Annotation::new(Coordinate::new(lat, lon), format!("p{i}")))
            .collect();
        MapScene::new(camera, annotations)
    }

    fn title_for(scene: &MapScene) -> String {
        let theme = Theme::default();
        MapPane::new(scene, &theme).title("Location").block_title()
    }

    #[test]
    fn test_title_singular_for_one_pin() {
        let scene = scene_with(&[(10.0, 10.0)]);
        assert_eq!(title_for(&scene), " Location (1 pin) ");
    }

    #[test]
    fn test_title_plural_for_zero_and_many_pins() {
        assert_eq!(title_for(&scene_with(&[])), " Location (0 pins) ");
        let scene = scene_with(&[(10.0, 10.0), (10.5, 9.5)]);
        assert_eq!(title_for(&scene), " Location (2 pins) ");
    }

    #[test]
    fn test_title_counts_off_screen_pins() {
        let scene = scene_with(&[(10.0, 10.0), (50.0, 50.0), (-40.0, 10.0)]);
        assert_eq!(title_for(&scene), " Location (1 pin, 2 off-screen) ");
    }
}
