//! RTL strip demo: Watch the anchor hold the view steady while items are
//! prepended at the visual-left end.
//!
//! Simulates the external layout solver: every frame it hands the anchor a
//! box extending left of the origin, the anchor re-anchors it and shifts
//! the viewport offset, and the visible window keeps showing the same
//! content even though the strip keeps growing.

use std::cell::Cell;
use std::io::stdout;
use std::rc::{Rc, Weak};
use std::thread;
use std::time::Duration;

use rtl_anchor::{
    ContentStrip, CorrectionListener, DirectionSource, FeatureFlags, LayoutBox, LocaleDirection,
    RtlScrollAnchor, ScrollViewport, TerminalViewport,
};

/// Stand-in for dependent UI (an index indicator) resynchronizing on each
/// correction.
struct IndexIndicator {
    corrections: Cell<u32>,
}

impl CorrectionListener for IndexIndicator {
    fn on_correction(&self) {
        self.corrections.set(self.corrections.get() + 1);
    }
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // RTL forced on, direction frozen at construction (legacy mode).
    let locale = Rc::new(LocaleDirection::new());
    locale.set_force_rtl(true);
    let source: Rc<dyn DirectionSource> = locale;
    let mut anchor = RtlScrollAnchor::from_flags(FeatureFlags::empty(), &source);

    let indicator = Rc::new(IndexIndicator {
        corrections: Cell::new(0),
    });
    let listener: Rc<dyn CorrectionListener> = indicator.clone();
    let weak: Weak<dyn CorrectionListener> = Rc::downgrade(&listener);
    anchor.set_listener(Some(weak));

    let mut strip = ContentStrip::new(2);
    for label in ["אחד", "שתיים", "שלוש", "ארבע", "חמש"] {
        strip.append(label);
    }

    let mut viewport = TerminalViewport::new(20);
    let mut out = stdout();

    println!("RTL Strip Demo");
    println!("==============");
    println!();
    println!("Each frame prepends one item at the visual-left end. The");
    println!("anchor compensates the scroll offset, so the 20-column");
    println!("window keeps showing the content it already showed.");
    println!();

    for incoming in ["שש", "שבע", "שמונה", "תשע", "עשר"] {
        let width = strip.measured();
        viewport.model_mut().set_content_width(width);

        // The solver, unaware of mirroring, extends the box left of origin.
        let solver_box = LayoutBox::new(-width, 0, 0, 1);
        let outcome = anchor.on_layout(true, solver_box, &mut strip, &mut viewport);

        viewport.render(&strip, &mut out)?;
        println!(
            "  | offset {:>3} of {:>3}, delta {:?}",
            viewport.scroll_x(),
            width,
            outcome.scroll_delta,
        );

        strip.prepend(incoming);
        thread::sleep(Duration::from_millis(300));
    }

    println!();
    println!(
        "{} corrections applied, last width {}",
        indicator.corrections.get(),
        anchor.last_width()
    );

    Ok(())
}
