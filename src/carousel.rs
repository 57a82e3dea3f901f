use log::{debug, warn};
use thiserror::Error;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SiteConfig;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Rotating index over a fixed number of items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `None` for an empty set, which has nothing to rotate.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, i: usize) -> bool {
        self.index == i
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    pub fn show_at(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange { index, len: self.len });
        }
        self.index = index;
        Ok(index)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They took our product from a rough prototype to a launch in six weeks.",
        author: "Maya Chen",
        role: "Founder, Brightloop",
    },
    Testimonial {
        quote: "Clear plans, honest timelines, and a team that answers the phone.",
        author: "Daniel Ortiz",
        role: "COO, Fieldnote",
    },
    Testimonial {
        quote: "Our sign-ups doubled after the relaunch. Worth every hour.",
        author: "Priya Raman",
        role: "Head of Growth, Tallyho",
    },
];

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    #[prop_or(TESTIMONIALS)]
    pub items: &'static [Testimonial],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let carousel = use_state_eq(|| Carousel::new(props.items.len()));
    let hovered = use_state_eq(|| false);

    let step = |forward: bool| {
        let carousel = carousel.clone();
        move || {
            if let Some(mut next) = *carousel {
                let index = if forward { next.next() } else { next.prev() };
                debug!("Showing testimonial {}", index);
                carousel.set(Some(next));
            }
        }
    };

    // A zero period tears the interval down while hovered; leaving restarts
    // it with a full period.
    {
        let advance = step(true);
        let period = if *hovered || carousel.is_none() {
            0
        } else {
            config.carousel_interval_ms
        };
        use_interval(advance, period);
    }

    let Some(current) = *carousel else {
        debug!("No testimonials to rotate");
        return html! {};
    };

    let on_prev = {
        let prev = step(false);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            prev();
        })
    };
    let on_next = {
        let next = step(true);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            next();
        })
    };
    let on_keydown = {
        let prev = step(false);
        let next = step(true);
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowLeft" => {
                e.prevent_default();
                prev();
            }
            "ArrowRight" => {
                e.prevent_default();
                next();
            }
            _ => {}
        })
    };
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let indicator = |i: usize| {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(mut next) = *carousel {
                match next.show_at(i) {
                    Ok(_) => carousel.set(Some(next)),
                    Err(err) => warn!("{}", err),
                }
            }
        })
    };

    html! {
        <div
            class="testimonials-carousel"
            tabindex="0"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onkeydown={on_keydown}
        >
            <div class="testimonial-track">
                { for props.items.iter().enumerate().map(|(i, t)| html! {
                    <div class={classes!("testimonial-card", current.is_active(i).then_some("active"))}>
                        <p class="testimonial-quote">{t.quote}</p>
                        <div class="testimonial-author">
                            <strong>{t.author}</strong>
                            <span>{t.role}</span>
                        </div>
                    </div>
                }) }
            </div>
            <div class="testimonial-controls">
                <button id="prevTestimonial" class="carousel-btn" aria-label="Previous testimonial" onclick={on_prev}>{"‹"}</button>
                <div class="indicators">
                    { for (0..current.len()).map(|i| html! {
                        <button
                            class={classes!("indicator", current.is_active(i).then_some("active"))}
                            aria-label={format!("Show testimonial {}", i + 1)}
                            onclick={indicator(i)}
                        />
                    }) }
                </div>
                <button id="nextTestimonial" class="carousel-btn" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_around() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn prev_from_zero_goes_to_last() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.prev(), 1);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for start in 0..3 {
            let mut carousel = Carousel::new(3).unwrap();
            carousel.show_at(start).unwrap();
            for _ in 0..3 {
                carousel.next();
            }
            assert_eq!(carousel.index(), start);
            for _ in 0..3 {
                carousel.prev();
            }
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn show_at_rejects_out_of_range() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.next();
        assert_eq!(
            carousel.show_at(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.show_at(2), Ok(2));
    }

    #[test]
    fn exactly_one_item_is_active() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.show_at(1).unwrap();
        let active: Vec<_> = (0..3).filter(|&i| carousel.is_active(i)).collect();
        assert_eq!(active, vec![1]);
    }

    #[test]
    fn single_item_carousel_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn empty_set_has_no_carousel() {
        assert!(Carousel::new(0).is_none());
    }
}
