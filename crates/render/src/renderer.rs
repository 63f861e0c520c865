use crate::frame::{DrawCall, FramePlan, RenderTarget};
use crate::transforms::FrameInputs;
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer walks the [`FramePlan`] in order for one frame's inputs and
/// produces its output (recorded GPU commands, a text trace, ...).
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&mut self, plan: &FramePlan, inputs: &FrameInputs) -> Self::Output;
}

/// Text renderer: a human-readable trace of what a frame would draw.
///
/// Used by the CLI and in tests of the render interface.
#[derive(Debug)]
pub struct DebugTextRenderer {
    surface_size: (u32, u32),
    offscreen_size: (u32, u32),
}

impl DebugTextRenderer {
    pub fn new(surface_size: (u32, u32), offscreen_size: (u32, u32)) -> Self {
        Self {
            surface_size,
            offscreen_size,
        }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, plan: &FramePlan, inputs: &FrameInputs) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Frame (t={:.2}s) ===", inputs.time);

        for group in plan.target_groups() {
            let (name, (w, h), attachments) = match group[0].target {
                RenderTarget::Offscreen => {
                    ("offscreen", self.offscreen_size, "reflection, refraction, depth")
                }
                RenderTarget::Surface => ("surface", self.surface_size, "color, depth"),
            };
            let _ = writeln!(out, "{name} {w}x{h} [{attachments}] cleared");
            for pass in group {
                let draw = match pass.draw {
                    DrawCall::Vertices(n) => format!("{n} vertices"),
                    DrawCall::Indexed(n) => format!("{n} indices"),
                };
                let samples: Vec<&str> = pass.samples.iter().map(|s| s.name()).collect();
                let _ = writeln!(
                    out,
                    "  {:<10} draw {draw}, samples [{}]",
                    pass.kind.name(),
                    samples.join(", ")
                );
            }
        }

        let p = inputs.light.position;
        let _ = writeln!(
            out,
            "light: pos=({:.1}, {:.1}, {:.1}) intensity={:.1}",
            p.x, p.y, p.z, inputs.light.intensity
        );
        out
    }
}
