//! 后端路径转换
//!
//! 将 [`PathGeometry`] 翻译为抽象路径构建接口 [`PathSink`] 上的调用。
//! 目标能力集以 `move_to`/`line_to`/`cubic_to`/`close` 为必备原语，
//! `quad_to` 与 `arc_to` 为可选能力：
//! - 缺少 `quad_to` 时二次贝塞尔通过精确升阶转为三次曲线；
//! - 缺少 `arc_to` 时遇到弧段显式报错，不做静默近似。
//!
//! 每个图形在发射前整体校验，校验失败时该图形不产生任何调用。

use crate::error::PathError;
use crate::geometry::{PathFigure, PathGeometry, PathSize, SegmentKind, SweepDirection};
use crate::math::Point2;

/// 后端路径构建能力
pub trait PathSink {
    /// 目标是否原生支持二次贝塞尔
    fn supports_quad(&self) -> bool {
        false
    }

    /// 目标是否原生支持椭圆弧
    fn supports_arc(&self) -> bool {
        false
    }

    fn move_to(&mut self, to: Point2);

    fn line_to(&mut self, to: Point2);

    fn cubic_to(&mut self, c1: Point2, c2: Point2, to: Point2);

    /// 仅在 `supports_quad` 为真时被调用
    fn quad_to(&mut self, _ctrl: Point2, _to: Point2) {}

    /// 仅在 `supports_arc` 为真时被调用
    fn arc_to(
        &mut self,
        _to: Point2,
        _size: PathSize,
        _rotation_angle: f64,
        _is_large_arc: bool,
        _sweep: SweepDirection,
    ) {
    }

    fn close(&mut self);
}

/// 二次贝塞尔精确升阶为三次
///
/// 给定当前点 `p0`、控制点 `p1`、终点 `p2`，返回等价三次曲线的
/// 两个控制点：`C1 = P0 + (2/3)(P1 − P0)`，`C2 = C1 + (1/3)(P2 − P0)`。
/// 升阶保持端点与端点切向不变。
pub fn elevate_quadratic(p0: Point2, p1: Point2, p2: Point2) -> (Point2, Point2) {
    let c1 = p0 + (p1 - p0) * (2.0 / 3.0);
    let c2 = c1 + (p2 - p0) * (1.0 / 3.0);
    (c1, c2)
}

/// 发射前校验：图形的每个段都必须可被目标表示
fn check_figure<S: PathSink>(figure: &PathFigure, sink: &S) -> Result<(), PathError> {
    for segment in &figure.segments {
        segment.kind.validate()?;
        if matches!(segment.kind, SegmentKind::Arc { .. }) && !sink.supports_arc() {
            return Err(PathError::UnsupportedSegment(segment.kind.type_name()));
        }
    }
    Ok(())
}

/// 将单个图形转换为 sink 调用
///
/// 校验失败时返回错误且 sink 未收到该图形的任何调用。
pub fn emit_figure<S: PathSink>(figure: &PathFigure, sink: &mut S) -> Result<(), PathError> {
    check_figure(figure, sink)?;

    let mut current = figure.start_point;
    sink.move_to(current);

    for segment in &figure.segments {
        match &segment.kind {
            SegmentKind::Line { point } => {
                sink.line_to(*point);
                current = *point;
            }
            SegmentKind::CubicBezier { p1, p2, p3 } => {
                sink.cubic_to(*p1, *p2, *p3);
                current = *p3;
            }
            SegmentKind::QuadraticBezier { p1, p2 } => {
                if sink.supports_quad() {
                    sink.quad_to(*p1, *p2);
                } else {
                    let (c1, c2) = elevate_quadratic(current, *p1, *p2);
                    sink.cubic_to(c1, c2, *p2);
                }
                current = *p2;
            }
            SegmentKind::Arc {
                point,
                size,
                rotation_angle,
                is_large_arc,
                sweep,
            } => {
                // check_figure 已保证 supports_arc
                sink.arc_to(*point, *size, *rotation_angle, *is_large_arc, *sweep);
                current = *point;
            }
            SegmentKind::PolyLine { points } => {
                for point in points {
                    sink.line_to(*point);
                    current = *point;
                }
            }
            SegmentKind::PolyCubicBezier { points } => {
                for triple in points.chunks_exact(3) {
                    sink.cubic_to(triple[0], triple[1], triple[2]);
                    current = triple[2];
                }
            }
            SegmentKind::PolyQuadraticBezier { points } => {
                for pair in points.chunks_exact(2) {
                    if sink.supports_quad() {
                        sink.quad_to(pair[0], pair[1]);
                    } else {
                        let (c1, c2) = elevate_quadratic(current, pair[0], pair[1]);
                        sink.cubic_to(c1, c2, pair[1]);
                    }
                    current = pair[1];
                }
            }
        }
    }

    if figure.is_closed {
        sink.close();
    }
    Ok(())
}

/// 将整个几何转换为 sink 调用
///
/// 任一图形校验失败即中止转换；失败图形不产生任何调用。
pub fn emit_geometry<S: PathSink>(geometry: &PathGeometry, sink: &mut S) -> Result<(), PathError> {
    tracing::debug!(figures = geometry.figures.len(), "converting path geometry");
    for figure in &geometry.figures {
        emit_figure(figure, sink)?;
    }
    Ok(())
}
