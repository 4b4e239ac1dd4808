//! 路径标记序列化
//!
//! 将路径几何渲染为 SVG path `d` 属性 / XAML PathGeometry 迷你语言文本。
//! 两种文法共享同一套字母 (`M`/`L`/`C`/`Q`/`A`/`z`) 和数字格式，
//! 仅保留风味开关作为接口缝隙。
//!
//! 数字输出固定使用与区域设置无关的小数点格式（Rust 的 `f64` Display
//! 本身即满足该要求），点输出为 `"X,Y"`，中间无空格。

use crate::geometry::{PathFigure, PathGeometry, PathSegment, SegmentKind, SweepDirection};
use crate::math::Point2;

/// 标记文法风味
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupFlavor {
    #[default]
    Svg,
    Xaml,
}

fn point_markup(point: &Point2) -> String {
    format!("{},{}", point.x, point.y)
}

fn points_markup(points: &[Point2]) -> String {
    points
        .iter()
        .map(point_markup)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 渲染单个路径段
pub fn segment_markup(segment: &PathSegment) -> String {
    match &segment.kind {
        SegmentKind::Line { point } => format!("L{}", point_markup(point)),
        SegmentKind::CubicBezier { p1, p2, p3 } => format!(
            "C{} {} {}",
            point_markup(p1),
            point_markup(p2),
            point_markup(p3)
        ),
        SegmentKind::QuadraticBezier { p1, p2 } => {
            format!("Q{} {}", point_markup(p1), point_markup(p2))
        }
        SegmentKind::Arc {
            point,
            size,
            rotation_angle,
            is_large_arc,
            sweep,
        } => format!(
            "A{},{} {} {} {} {}",
            size.width,
            size.height,
            rotation_angle,
            if *is_large_arc { "1" } else { "0" },
            if *sweep == SweepDirection::Clockwise {
                "1"
            } else {
                "0"
            },
            point_markup(point)
        ),
        // 序列段按扁平点表输出，不做三点/两点分组
        SegmentKind::PolyLine { points } => format!("L{}", points_markup(points)),
        SegmentKind::PolyCubicBezier { points } => format!("C{}", points_markup(points)),
        SegmentKind::PolyQuadraticBezier { points } => format!("Q{}", points_markup(points)),
    }
}

/// 渲染单个图形
pub fn figure_markup(figure: &PathFigure) -> String {
    let mut out = format!("M{}", point_markup(&figure.start_point));
    for segment in &figure.segments {
        out.push_str(&segment_markup(segment));
    }
    if figure.is_closed {
        out.push('z');
    }
    out
}

/// 渲染整个几何
///
/// 空几何输出空字符串。两种风味当前输出字节级一致。
pub fn geometry_markup(geometry: &PathGeometry, flavor: MarkupFlavor) -> String {
    match flavor {
        MarkupFlavor::Svg | MarkupFlavor::Xaml => geometry
            .figures
            .iter()
            .map(figure_markup)
            .collect::<String>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GeometryBuilder;
    use crate::geometry::{FillRule, PathSize};

    fn segment(kind: SegmentKind) -> PathSegment {
        PathSegment::new(kind, true, true)
    }

    #[test]
    fn test_empty_figure() {
        let open = PathFigure::new(Point2::new(0.0, 0.0), true, false);
        assert_eq!(figure_markup(&open), "M0,0");

        let closed = PathFigure::new(Point2::new(0.0, 0.0), true, true);
        assert_eq!(figure_markup(&closed), "M0,0z");
    }

    #[test]
    fn test_empty_geometry() {
        let geometry = PathGeometry::new(FillRule::NonZero);
        assert_eq!(geometry_markup(&geometry, MarkupFlavor::Svg), "");
        assert_eq!(geometry_markup(&geometry, MarkupFlavor::Xaml), "");
    }

    #[test]
    fn test_arc_markup() {
        let arc = segment(SegmentKind::Arc {
            point: Point2::new(0.0, 0.0),
            size: PathSize::new(10.0, 20.0),
            rotation_angle: 90.0,
            is_large_arc: true,
            sweep: SweepDirection::Clockwise,
        });
        assert_eq!(segment_markup(&arc), "A10,20 90 1 1 0,0");
    }

    #[test]
    fn test_counter_clockwise_arc_markup() {
        let arc = segment(SegmentKind::Arc {
            point: Point2::new(5.0, 5.0),
            size: PathSize::new(1.0, 1.0),
            rotation_angle: 0.0,
            is_large_arc: false,
            sweep: SweepDirection::CounterClockwise,
        });
        assert_eq!(segment_markup(&arc), "A1,1 0 0 0 5,5");
    }

    #[test]
    fn test_cubic_markup() {
        let cubic = segment(SegmentKind::CubicBezier {
            p1: Point2::new(0.0, 0.0),
            p2: Point2::new(0.0, 0.0),
            p3: Point2::new(0.0, 0.0),
        });
        assert_eq!(segment_markup(&cubic), "C0,0 0,0 0,0");
    }

    #[test]
    fn test_quadratic_markup() {
        let quad = segment(SegmentKind::QuadraticBezier {
            p1: Point2::new(0.0, 0.0),
            p2: Point2::new(0.0, 0.0),
        });
        assert_eq!(segment_markup(&quad), "Q0,0 0,0");
    }

    #[test]
    fn test_poly_quadratic_flat_markup() {
        // 序列段按扁平点表输出，即使点数不是步长的整数倍
        let poly = segment(SegmentKind::PolyQuadraticBezier {
            points: vec![Point2::new(0.0, 0.0); 5],
        });
        assert_eq!(segment_markup(&poly), "Q0,0 0,0 0,0 0,0 0,0");
    }

    #[test]
    fn test_poly_line_flat_markup() {
        let poly = segment(SegmentKind::PolyLine {
            points: vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)],
        });
        assert_eq!(segment_markup(&poly), "L1,2 3,4");
    }

    #[test]
    fn test_fractional_coordinates() {
        let line = segment(SegmentKind::Line {
            point: Point2::new(1.5, -2.25),
        });
        assert_eq!(segment_markup(&line), "L1.5,-2.25");
    }

    #[test]
    fn test_built_geometry_markup() {
        let mut builder = GeometryBuilder::new(FillRule::NonZero);
        builder.begin_figure(Point2::new(0.0, 0.0), true, true);
        builder.line_to(Point2::new(10.0, 0.0), true, true).unwrap();
        builder
            .bezier_to(
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
                Point2::new(0.0, 0.0),
                true,
                true,
            )
            .unwrap();

        let geometry = builder.finish();
        assert_eq!(
            geometry_markup(&geometry, MarkupFlavor::Svg),
            "M0,0L10,0C10,10 0,10 0,0z"
        );
        // 两种风味输出字节级一致
        assert_eq!(
            geometry_markup(&geometry, MarkupFlavor::Svg),
            geometry_markup(&geometry, MarkupFlavor::Xaml)
        );
    }
}
