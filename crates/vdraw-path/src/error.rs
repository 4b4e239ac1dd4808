//! 路径几何错误定义

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("no current figure: call begin_figure before appending segments")]
    NoCurrentFigure,

    #[error("segment type not supported by target backend: {0}")]
    UnsupportedSegment(&'static str),

    #[error("malformed {kind} segment: {count} points is not a positive multiple of {stride}")]
    MalformedPolySegment {
        kind: &'static str,
        count: usize,
        stride: usize,
    },
}
