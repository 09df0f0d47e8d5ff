//! Marketing slideshow: three fixed slides, auto-advancing every five
//! seconds, with manual previous/next and per-slide dot controls.

use leptos::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
}

pub static SLIDES: [Slide; 3] = [
    Slide { id: 1, src: "assets/slide1.png", alt: "slide1" },
    Slide { id: 2, src: "assets/slide2.png", alt: "slide2" },
    Slide { id: 3, src: "assets/slide3.png", alt: "slide3" },
];

/// Step forward, wrapping from the last slide to the first.
pub(crate) fn wrap_next(current: usize, len: usize) -> usize {
    if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Step backward, wrapping from the first slide to the last.
pub(crate) fn wrap_prev(current: usize, len: usize) -> usize {
    if current == 0 {
        len.saturating_sub(1)
    } else {
        current - 1
    }
}

#[component]
pub fn Slideshow() -> impl IntoView {
    let current = RwSignal::new(0usize);

    let next = move |_| current.update(|i| *i = wrap_next(*i, SLIDES.len()));
    let prev = move |_| current.update(|i| *i = wrap_prev(*i, SLIDES.len()));

    // Manual interaction does not reset the cadence; the interval just
    // keeps ticking. The handle must be cleared on teardown or the tick
    // would outlive the component.
    if let Ok(handle) = set_interval_with_handle(
        move || current.update(|i| *i = wrap_next(*i, SLIDES.len())),
        config::SLIDE_INTERVAL,
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <div class="slideshow">
            <div class="slide-nav">
                <button class="slide-arrow" aria-label="Slide anterior" on:click=prev>
                    "‹"
                </button>
                <button class="slide-arrow" aria-label="Próximo slide" on:click=next>
                    "›"
                </button>
            </div>

            <div class="slide-frame">
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(|(index, slide)| {
                        view! {
                            <div class=move || {
                                if current.get() == index { "slide active" } else { "slide" }
                            }>
                                <img src=slide.src alt=slide.alt />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="slide-dots">
                {(0..SLIDES.len())
                    .map(|index| {
                        view! {
                            <button
                                class=move || {
                                    if current.get() == index { "dot active" } else { "dot" }
                                }
                                aria-label=format!("Ir para o slide {}", index + 1)
                                on:click=move |_| current.set(index)
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_auto_ticks_complete_one_cycle() {
        let mut index = 0;
        for _ in 0..3 {
            index = wrap_next(index, SLIDES.len());
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn next_wraps_at_the_end() {
        assert_eq!(wrap_next(0, 3), 1);
        assert_eq!(wrap_next(1, 3), 2);
        assert_eq!(wrap_next(2, 3), 0);
    }

    #[test]
    fn prev_wraps_at_the_start() {
        assert_eq!(wrap_prev(0, 3), 2);
        assert_eq!(wrap_prev(2, 3), 1);
        assert_eq!(wrap_prev(1, 3), 0);
    }

    #[test]
    fn degenerate_lengths_do_not_underflow() {
        assert_eq!(wrap_next(0, 1), 0);
        assert_eq!(wrap_prev(0, 1), 0);
        assert_eq!(wrap_prev(0, 0), 0);
    }

    #[test]
    fn slides_are_in_fixed_order() {
        assert_eq!(SLIDES.len(), 3);
        assert_eq!(SLIDES[0].src, "assets/slide1.png");
        assert_eq!(SLIDES[2].id, 3);
    }
}
