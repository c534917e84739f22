use yew::prelude::*;

use crate::components::icons::ChevronDownIcon;
use crate::reveal::Reveal;

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "I'm nervous to talk about these topics with someone I don't know. Is that normal?",
        "Completely normal. Most Kallahs arrive with anxiety about these conversations. That's exactly why I've created a safe, judgment-free space. By the end of our first session, you'll feel relieved you reached out.",
    ),
    (
        "My mother wants to sit in on the sessions. Is that okay?",
        "I recommend keeping sessions one-on-one so you have space to ask anything freely. We can discuss what works best for you in our first conversation.",
    ),
    (
        "How is your class different from a standard Kallah class?",
        "Standard classes focus primarily on Halacha. Mine weaves together traditional Halacha with emotional intelligence, attachment theory, and nervous-system science. I help you understand yourself — your body, your feelings, your needs.",
    ),
    (
        "Can I do sessions remotely if I'm not in Melbourne?",
        "Absolutely. I work with Kallahs worldwide via Zoom. The connection and safety are just as powerful online as in-person.",
    ),
    (
        "How long is each session?",
        "Sessions are typically 45–60 minutes, depending on what we're exploring. I always make sure you have the time you need.",
    ),
    (
        "What if I'm not sure which package is right for me?",
        "That's what your first consultation is for. We'll talk about where you are, what you need, and design a plan that works for you. No pressure to commit to anything.",
    ),
];

/// Single-open accordion transition: clicking the open item closes it,
/// clicking any other item opens it and closes the previous one.
fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-inner">
                <Reveal>
                    <div class="section-heading">
                        <span class="eyebrow">{"Frequently Asked Questions"}</span>
                        <h2>{"Your questions, "}<em class="grad-text">{"answered."}</em></h2>
                    </div>
                </Reveal>
                <div class="faq-list">
                    { for FAQ_ITEMS.iter().enumerate().map(|(i, (question, answer))| {
                        let is_open = *open == Some(i);
                        let onclick = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| {
                                open.set(toggle_open(*open, i));
                            })
                        };
                        html! {
                            <Reveal delay_ms={(i as u32) * 50}>
                                <div class="faq-item">
                                    <button class="faq-question" {onclick}>
                                        <span class="faq-question-text">{*question}</span>
                                        <span class={classes!("faq-chevron", is_open.then_some("open"))}>
                                            <ChevronDownIcon />
                                        </span>
                                    </button>
                                    <div class={classes!("faq-answer", is_open.then_some("open"))}>
                                        <p>{*answer}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_closed_item_opens_it() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(0), 2), Some(2));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle_open(Some(3), 3), None);
    }

    #[test]
    fn at_most_one_item_is_open_across_any_click_sequence() {
        let clicks = [0usize, 1, 1, 4, 2, 2, 2, 5, 0];
        let mut open = None;
        for &clicked in &clicks {
            open = toggle_open(open, clicked);
            // Option<usize> can name at most one open item; the transition
            // never produces an index outside the clicked set.
            if let Some(i) = open {
                assert!(clicks.contains(&i));
            }
        }
    }

    #[test]
    fn reopening_after_close_works() {
        let mut open = None;
        open = toggle_open(open, 1);
        open = toggle_open(open, 1);
        assert_eq!(open, None);
        open = toggle_open(open, 1);
        assert_eq!(open, Some(1));
    }
}
