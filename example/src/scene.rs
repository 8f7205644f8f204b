//! The demo scene: three occluders around a single light.

use umbra::{Color, PathSurface, Point, Polygon, ShadowCaster, Winding};

/// Settings for rendering the demo.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Canvas width in pixels. Also used as the default shadow scale.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Position of the point light.
    pub light: Point,
    pub background: Color,
    pub occluder: Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            light: Point::new(320.0, 240.0),
            background: Color::from_rgb(0.93, 0.91, 0.86),
            occluder: Color::from_rgb(0.25, 0.32, 0.45),
        }
    }
}

/// Occluders placed around the light, one per entry point of the caster.
pub struct Scene {
    rectangle: [f32; 4],
    hexagon: Polygon,
    clockwise_triangle: Vec<Point>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        let outline: Vec<Point> = (0..6)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::FRAC_PI_3;
                Point::new(470.0 + 40.0 * angle.cos(), 330.0 + 40.0 * angle.sin())
            })
            .collect();
        // Generated with increasing angle, which runs clockwise on screen.
        let winding = Winding::of(&outline).unwrap_or(Winding::Clockwise);

        Self {
            rectangle: [180.0, 120.0, 70.0, 50.0],
            hexagon: Polygon::with_winding(outline, winding),
            clockwise_triangle: vec![
                Point::new(200.0, 330.0),
                Point::new(260.0, 390.0),
                Point::new(160.0, 400.0),
            ],
        }
    }

    /// Casts every shadow, then paints the occluders on top of them.
    pub fn draw<S: PathSurface>(
        &self,
        surface: &mut S,
        caster: &ShadowCaster,
        config: &DemoConfig,
    ) {
        let [x, y, w, h] = self.rectangle;
        caster.cast_from_rectangle(surface, config.light, x, y, w, h, None);
        caster.cast(surface, config.light, &self.hexagon, None);
        caster.cast_inverse(surface, config.light, &self.clockwise_triangle, None);

        fill_outline(surface, Polygon::from_rect(x, y, w, h).points(), config.occluder);
        fill_outline(surface, self.hexagon.points(), config.occluder);
        fill_outline(surface, &self.clockwise_triangle, config.occluder);

        let marker = Polygon::from_rect(config.light.x - 3.0, config.light.y - 3.0, 6.0, 6.0);
        fill_outline(surface, marker.points(), Color::from_rgb(1.0, 0.8, 0.1));
    }
}

fn fill_outline<S: PathSurface>(surface: &mut S, points: &[Point], color: Color) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(*first);
    for point in rest {
        surface.line_to(*point);
    }
    surface.close_path();
    surface.set_fill_color(color);
    surface.fill();
}

#[cfg(test)]
mod tests {
    use umbra::{CasterConfig, RecordingSurface};

    use super::*;

    #[test]
    fn every_occluder_casts_and_is_painted() {
        let config = DemoConfig::default();
        let caster = ShadowCaster::new(CasterConfig::from_surface_width(config.width as f32));
        let mut surface = RecordingSurface::new();

        Scene::new().draw(&mut surface, &caster, &config);

        let fills = surface.filled_paths();
        let shadows = fills
            .iter()
            .filter(|(_, color)| *color == umbra::SHADOW_FILL)
            .count();
        // Each convex occluder shows at least one silhouette edge.
        assert!(shadows >= 3);
        // Three occluders and the light marker.
        assert_eq!(fills.len() - shadows, 4);
    }

    #[test]
    fn hexagon_is_counter_clockwise() {
        let scene = Scene::new();
        assert_eq!(
            Winding::of(scene.hexagon.points()),
            Some(Winding::CounterClockwise)
        );
    }
}
