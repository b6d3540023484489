use crate::error::ChartResult;
use crate::render::{Primitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend materializes it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (mut rects, mut paths, mut texts) = (0, 0, 0);
        for primitive in &frame.primitives {
            match primitive {
                Primitive::Rect(_) => rects += 1,
                Primitive::ArcPath(_) => paths += 1,
                Primitive::Text(_) => texts += 1,
            }
        }
        self.frames_rendered += 1;
        self.last_rect_count = rects;
        self.last_path_count = paths;
        self.last_text_count = texts;
        Ok(())
    }
}
