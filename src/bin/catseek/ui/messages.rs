use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use catseek::{Message, MessageId};

use crate::runtime::ScrollState;

use super::theme::Theme;

use bubble::render_bubble;
use measure::wrapped_height;

mod bubble;
mod measure;

/// Caches rendered bubbles across frames. Messages are immutable once
/// appended, so an entry only goes stale when the transcript width or the
/// message's selection state changes.
#[derive(Default)]
pub struct MessageRenderer {
    cache: HashMap<MessageId, CacheEntry>,
}

struct CacheEntry {
    width: u16,
    selected: bool,
    text: Text<'static>,
    height: u16,
}

impl MessageRenderer {
    fn entry(&mut self, message: &Message, selected: bool, props: &TranscriptProps<'_>) -> &CacheEntry {
        match self.cache.entry(message.id) {
            Entry::Occupied(mut occupied) => {
                let stale = {
                    let entry = occupied.get();
                    entry.width != props.area.width || entry.selected != selected
                };
                if stale {
                    occupied.insert(build_entry(message, selected, props));
                }
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(build_entry(message, selected, props)),
        }
    }
}

pub struct TranscriptProps<'a> {
    pub area: Rect,
    pub messages: &'a [Message],
    pub theme: &'a Theme,
    pub scroll: ScrollState,
    pub selected: Option<usize>,
    pub assistant_name: &'a str,
    pub show_timestamps: bool,
}

/// Draws the transcript: newest messages hug the bottom edge once the
/// conversation overflows the area, and fill from the top until then.
pub fn render_transcript(
    frame: &mut Frame<'_>,
    renderer: &mut MessageRenderer,
    props: TranscriptProps<'_>,
) {
    let segments = collect_segments(renderer, &props);
    let total: u16 = segments.iter().map(|segment| segment.height).sum();
    let mut y = props
        .area
        .y
        .saturating_add(props.area.height.saturating_sub(total));
    for segment in segments.into_iter().rev() {
        let area = Rect::new(props.area.x, y, props.area.width, segment.height);
        let paragraph = Paragraph::new(segment.text)
            .wrap(Wrap { trim: false })
            .scroll((segment.scroll, 0));
        frame.render_widget(paragraph, area);
        y = y.saturating_add(segment.height);
    }
}

struct Segment {
    text: Text<'static>,
    height: u16,
    scroll: u16,
}

/// Walks messages newest-first, consuming the scroll offset as lines hidden
/// below the viewport, until the area is filled.
fn collect_segments(renderer: &mut MessageRenderer, props: &TranscriptProps<'_>) -> Vec<Segment> {
    let total = transcript_height(renderer, props);
    let mut state = SegmentState::new(props.area.height, props.scroll, total);
    let mut segments = Vec::new();
    for (index, message) in props.messages.iter().enumerate().rev() {
        if state.is_full() {
            break;
        }
        let selected = props.selected == Some(index);
        if let Some(segment) = state.next(message, selected, renderer, props) {
            segments.push(segment);
        }
    }
    segments
}

fn transcript_height(renderer: &mut MessageRenderer, props: &TranscriptProps<'_>) -> i32 {
    let mut total = 0i32;
    for (index, message) in props.messages.iter().enumerate() {
        let selected = props.selected == Some(index);
        total += i32::from(renderer.entry(message, selected, props).height);
    }
    total
}

struct SegmentState {
    remaining: i32,
    skip: i32,
}

impl SegmentState {
    fn new(area_height: u16, scroll: ScrollState, total: i32) -> Self {
        let remaining = i32::from(area_height);
        // Clamps the offset so scrolling stops at the oldest message. Goes
        // negative when the transcript is shorter than the area, which pads
        // the newest segment and anchors everything to the top.
        let max_offset = total.saturating_sub(remaining);
        let skip = i32::from(scroll.offset()).min(max_offset);
        Self { remaining, skip }
    }

    fn is_full(&self) -> bool {
        self.remaining <= 0
    }

    fn next(
        &mut self,
        message: &Message,
        selected: bool,
        renderer: &mut MessageRenderer,
        props: &TranscriptProps<'_>,
    ) -> Option<Segment> {
        let entry = renderer.entry(message, selected, props);
        let height = i32::from(entry.height);
        if self.skip >= height {
            self.skip -= height;
            return None;
        }
        let available = height - self.skip;
        let take = available.min(self.remaining);
        let hidden_top = (available - take) as u16;
        self.remaining -= take;
        self.skip = 0;
        Some(Segment {
            text: entry.text.clone(),
            height: take as u16,
            scroll: hidden_top,
        })
    }
}

fn build_entry(message: &Message, selected: bool, props: &TranscriptProps<'_>) -> CacheEntry {
    let text = render_bubble(
        message,
        props.theme,
        selected,
        props.assistant_name,
        props.show_timestamps,
    );
    let height = wrapped_height(&text, props.area.width);
    CacheEntry {
        width: props.area.width,
        selected,
        text,
        height: height.max(1),
    }
}
