//! 路径几何构建器
//!
//! 按经典路径绘制 API 的顺序协议追加图形与路径段：
//! 先 `begin_figure`，之后的 `*_to` 调用追加到当前图形。
//! 在没有当前图形时调用 `*_to` 返回 [`PathError::NoCurrentFigure`]。

use crate::error::PathError;
use crate::geometry::{
    FillRule, PathFigure, PathGeometry, PathSegment, PathSize, SegmentKind, SweepDirection,
};
use crate::math::Point2;

/// 几何构建器
///
/// 唯一的可变状态是当前图形索引，单个构建器实例不跨线程共享。
#[derive(Debug, Default)]
pub struct GeometryBuilder {
    geometry: PathGeometry,
    current: Option<usize>,
}

impl GeometryBuilder {
    pub fn new(fill_rule: FillRule) -> Self {
        Self {
            geometry: PathGeometry::new(fill_rule),
            current: None,
        }
    }

    /// 开始一个新图形，并将其设为当前图形
    pub fn begin_figure(&mut self, start_point: Point2, is_filled: bool, is_closed: bool) {
        self.geometry
            .figures
            .push(PathFigure::new(start_point, is_filled, is_closed));
        self.current = Some(self.geometry.figures.len() - 1);
    }

    fn push_segment(
        &mut self,
        kind: SegmentKind,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), PathError> {
        let index = self.current.ok_or(PathError::NoCurrentFigure)?;
        self.geometry.figures[index]
            .segments
            .push(PathSegment::new(kind, is_stroked, is_smooth_join));
        Ok(())
    }

    pub fn line_to(
        &mut self,
        point: Point2,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), PathError> {
        self.push_segment(SegmentKind::Line { point }, is_stroked, is_smooth_join)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        &mut self,
        point: Point2,
        size: PathSize,
        rotation_angle: f64,
        is_large_arc: bool,
        sweep: SweepDirection,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), PathError> {
        self.push_segment(
            SegmentKind::Arc {
                point,
                size,
                rotation_angle,
                is_large_arc,
                sweep,
            },
            is_stroked,
            is_smooth_join,
        )
    }

    pub fn bezier_to(
        &mut self,
        p1: Point2,
        p2: Point2,
        p3: Point2,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), PathError> {
        self.push_segment(
            SegmentKind::CubicBezier { p1, p2, p3 },
            is_stroked,
            is_smooth_join,
        )
    }

    pub fn quadratic_bezier_to(
        &mut self,
        p1: Point2,
        p2: Point2,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), PathError> {
        self.push_segment(
            SegmentKind::QuadraticBezier { p1, p2 },
            is_stroked,
            is_smooth_join,
        )
    }

    pub fn poly_line_to(
        &mut self,
        points: Vec<Point2>,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), PathError> {
        self.push_segment(SegmentKind::PolyLine { points }, is_stroked, is_smooth_join)
    }

    /// 追加三次贝塞尔序列段
    ///
    /// 点数不在此处校验：不完整的尾部点在模型中是合法数据，
    /// 步长约束由后端转换器在发射前检查。
    pub fn poly_bezier_to(
        &mut self,
        points: Vec<Point2>,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), PathError> {
        self.push_segment(
            SegmentKind::PolyCubicBezier { points },
            is_stroked,
            is_smooth_join,
        )
    }

    pub fn poly_quadratic_bezier_to(
        &mut self,
        points: Vec<Point2>,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), PathError> {
        self.push_segment(
            SegmentKind::PolyQuadraticBezier { points },
            is_stroked,
            is_smooth_join,
        )
    }

    /// 访问构建中的几何
    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    /// 结束构建，发布只读几何
    pub fn finish(self) -> PathGeometry {
        self.geometry
    }
}
