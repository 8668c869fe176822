// Host boundary of the animator: where it draws, how it is woken up each
// frame and where resize notifications come from. The browser versions live
// in `web`; tests supply recording fakes.

use crate::color::Color;
use vecmath::Vector2;

/// 2D immediate-mode drawing target sized in pixels.
pub trait Surface {
    type Error: std::fmt::Debug;

    /// Current size of the viewport the surface should cover.
    fn viewport_size(&self) -> (f64, f64);

    /// Resizes the backing store. Clears its contents.
    fn set_size(&mut self, width: f64, height: f64);

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        line_width: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), Self::Error>;
}

/// Hands out the drawing surface. `None` when the platform refuses a 2D context.
pub trait SurfaceProvider {
    type Surface: Surface;

    fn acquire(&mut self) -> Option<Self::Surface>;
}

/// Vsync-aligned "call me next frame" primitive.
///
/// A requested frame is delivered by the host calling `Animator::frame` with
/// a monotonic timestamp in milliseconds. `None` means no frame will come.
pub trait FrameScheduler {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Viewport resize notifications, delivered through `Animator::resize_requested`.
pub trait ResizeSource {
    fn subscribe(&mut self);

    fn unsubscribe(&mut self);
}
