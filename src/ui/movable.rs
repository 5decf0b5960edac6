// SPDX-License-Identifier: MPL-2.0
//! Movable element rendered on a canvas that covers its container.
//!
//! The canvas fills the parent region, so the canvas bounds are the
//! container bounds the drag rules clamp against. The element itself is
//! drawn at the drag controller's position inside that region.

use crate::domain::{
    measure, render, ContainerBounds, DrawCommand, ElementContent, Label, LabelColor,
    LayoutUpdate, Measurement, PointerEvent, Position, Rect, SizeConstraint,
};
use crate::media::{LoadedContent, LINE_HEIGHT_FACTOR};
use crate::ui::state::State;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::widget::text::LineHeight;
use iced::widget::{image, Action};
use iced::{
    mouse, touch, window, Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme,
};
use std::cell::OnceCell;

/// Canvas program for one movable element.
pub struct MovableView<'a, Message> {
    content: &'a ElementContent,
    image: Option<&'a image::Handle>,
    width: SizeConstraint,
    height: SizeConstraint,
    measurement: OnceCell<Measurement>,
    on_move: Option<Box<dyn Fn(Point) -> Message + 'a>>,
}

impl<'a, Message> MovableView<'a, Message> {
    /// Creates a self-sized element for the given content.
    #[must_use]
    pub fn new(loaded: &'a LoadedContent) -> Self {
        let content = &loaded.content;
        Self {
            content,
            image: loaded.image.as_ref().map(|data| &data.handle),
            width: SizeConstraint::Unspecified,
            height: SizeConstraint::Unspecified,
            measurement: OnceCell::new(),
            on_move: None,
        }
    }

    /// Sets the element width. Only [`Length::Fixed`] constrains it.
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = constraint_from_length(width.into());
        self.measurement = OnceCell::new();
        self
    }

    /// Sets the element height. Only [`Length::Fixed`] constrains it.
    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = constraint_from_length(height.into());
        self.measurement = OnceCell::new();
        self
    }

    /// Sets both constraints directly.
    #[must_use]
    pub fn constraints(mut self, width: SizeConstraint, height: SizeConstraint) -> Self {
        self.width = width;
        self.height = height;
        self.measurement = OnceCell::new();
        self
    }

    /// Publishes the element position after every committed move.
    #[must_use]
    pub fn on_move(mut self, on_move: impl Fn(Point) -> Message + 'a) -> Self {
        self.on_move = Some(Box::new(on_move));
        self
    }

    /// Size and image placement under the current constraints.
    ///
    /// Measured on first use and cached for the lifetime of this view.
    #[must_use]
    pub fn measurement(&self) -> Measurement {
        *self
            .measurement
            .get_or_init(|| measure(self.width, self.height, self.content))
    }

    /// Creates a Canvas widget filling the parent region.
    pub fn into_element(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Element rectangle in window coordinates.
    fn element_rect(&self, position: Position, bounds: Rectangle) -> Rect {
        let size = self.measurement().size;
        Rect::new(
            bounds.x + position.x,
            bounds.y + position.y,
            size.width,
            size.height,
        )
    }

    /// Translates an Iced event into a pointer event for the drag controller.
    fn pointer_event(
        &self,
        state: &mut State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PointerEvent> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position()?;
                let element = self.element_rect(state.drag.position(), bounds);
                if !element.contains(position.x, position.y) {
                    return None;
                }
                state.finger = None;
                Some(PointerEvent::Press {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => Some(PointerEvent::Move {
                x: position.x,
                y: position.y,
            }),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Ends the session whichever pointer started it.
                state.finger = None;
                Some(PointerEvent::Release)
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.finger.is_some() {
                    return None;
                }
                let element = self.element_rect(state.drag.position(), bounds);
                if !element.contains(position.x, position.y) {
                    return None;
                }
                state.finger = Some(*id);
                Some(PointerEvent::Press {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                (state.finger == Some(*id)).then_some(PointerEvent::Move {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                if state.finger != Some(*id) {
                    return None;
                }
                state.finger = None;
                Some(PointerEvent::Release)
            }
            _ => None,
        }
    }
}

impl<Message> canvas::Program<Message> for MovableView<'_, Message> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if let Event::Window(window::Event::Closed) = event {
            state.container.detach();
            log::debug!("movable view detached from its container");
            return None;
        }

        if state.container.attach() {
            log::debug!("movable view attached to its container");
        }
        let container = ContainerBounds::new(bounds.width, bounds.height);
        if let LayoutUpdate::Changed(container) = state.container.on_parent_layout(container) {
            log::debug!(
                "container laid out at {}x{}",
                container.width,
                container.height
            );
        }

        let pointer = self.pointer_event(state, event, bounds, cursor)?;
        let was_dragging = state.drag.is_dragging();
        let previous = state.drag.position();

        let status = state.drag.handle(
            pointer,
            self.measurement().size,
            state.container.bounds_or_zero(),
        );

        match (was_dragging, state.drag.is_dragging()) {
            (false, true) => log::debug!("drag started at {:?}", previous),
            (true, false) => log::debug!("drag ended at {:?}", state.drag.position()),
            _ => {}
        }

        let position = state.drag.position();
        let action = if position == previous {
            if status.is_captured() || was_dragging != state.drag.is_dragging() {
                Action::request_redraw()
            } else {
                return None;
            }
        } else if let Some(on_move) = &self.on_move {
            Action::publish(on_move(Point::new(position.x, position.y)))
        } else {
            Action::request_redraw()
        };

        Some(if status.is_captured() {
            action.and_capture()
        } else {
            action
        })
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let origin = state.drag.position();

        for command in render::plan(self.content, &self.measurement()) {
            match command {
                // The source rectangle is always the whole image, which is
                // what the renderer draws for a handle.
                DrawCommand::Image { destination, .. } => {
                    if let Some(handle) = self.image {
                        frame.draw_image(
                            Rectangle::new(
                                Point::new(origin.x + destination.x, origin.y + destination.y),
                                Size::new(destination.width, destination.height),
                            ),
                            canvas::Image::new(handle.clone()),
                        );
                    }
                }
                DrawCommand::Label { x, baseline } => {
                    if let Some(label) = &self.content.label {
                        frame.fill_text(label_text(label, origin, x, baseline));
                    }
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.drag.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        let element = self.element_rect(state.drag.position(), bounds);
        match cursor.position() {
            Some(position) if element.contains(position.x, position.y) => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}

/// Only fixed lengths are exact; fill/shrink/portion let the element size
/// itself.
#[must_use]
pub fn constraint_from_length(length: Length) -> SizeConstraint {
    match length {
        Length::Fixed(size) => SizeConstraint::Exact(size),
        _ => SizeConstraint::Unspecified,
    }
}

/// Canvas text for `label` with its baseline at `baseline` below `origin`.
///
/// Text is positioned by its top edge, one measured line box above the
/// baseline. The line height matches the one used to measure the label.
fn label_text(label: &Label, origin: Position, x: f32, baseline: f32) -> Text {
    let top = baseline - label.bounds().height;
    Text {
        content: label.text().to_string(),
        position: Point::new(origin.x + x, origin.y + top),
        color: to_color(label.color()),
        size: label.size().into(),
        line_height: LineHeight::Relative(LINE_HEIGHT_FACTOR),
        ..Text::default()
    }
}

fn to_color(color: LabelColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComputedSize, Dimensions, DragState, ImageContent};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::widget::canvas::Program;

    fn loaded(image: Option<ImageContent>, label: Option<Label>) -> LoadedContent {
        LoadedContent {
            content: ElementContent::new(image, label),
            image: None,
        }
    }

    fn container() -> Rectangle {
        Rectangle::new(Point::new(10.0, 20.0), Size::new(300.0, 300.0))
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn left_press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn cursor_moved(x: f32, y: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    fn left_release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    #[test]
    fn fixed_length_maps_to_exact_constraint() {
        assert_eq!(
            constraint_from_length(Length::Fixed(42.0)),
            SizeConstraint::Exact(42.0)
        );
        assert_eq!(
            constraint_from_length(Length::Fill),
            SizeConstraint::Unspecified
        );
        assert_eq!(
            constraint_from_length(Length::Shrink),
            SizeConstraint::Unspecified
        );
    }

    #[test]
    fn builder_remeasures_with_new_constraints() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        assert_eq!(view.measurement().size, ComputedSize::new(50.0, 50.0));

        let view = view.width(Length::Fixed(80.0));
        assert_eq!(view.measurement().size, ComputedSize::new(80.0, 50.0));
    }

    #[test]
    fn press_on_element_is_captured_and_starts_drag() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();

        let action = view.update(&mut state, &left_press(), container(), at(30.0, 40.0));
        assert!(action.is_some());
        assert!(state.drag.is_dragging());
        assert!(state.container.is_attached());
    }

    #[test]
    fn press_outside_element_is_ignored() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();

        let action = view.update(&mut state, &left_press(), container(), at(200.0, 200.0));
        assert!(action.is_none());
        assert_eq!(state.drag.state(), DragState::Idle);
    }

    #[test]
    fn drag_uses_window_coordinates_and_clamps() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();
        let bounds = container();

        view.update(&mut state, &left_press(), bounds, at(30.0, 40.0));
        view.update(&mut state, &cursor_moved(50.0, 30.0), bounds, at(50.0, 30.0));
        assert_eq!(state.drag.position(), Position::new(20.0, 0.0));

        view.update(&mut state, &cursor_moved(330.0, 30.0), bounds, at(330.0, 30.0));
        assert_eq!(state.drag.position(), Position::new(250.0, 0.0));

        view.update(&mut state, &left_release(), bounds, at(330.0, 30.0));
        assert!(!state.drag.is_dragging());
        assert_eq!(state.drag.position(), Position::new(250.0, 0.0));
    }

    #[test]
    fn container_bounds_follow_canvas_bounds() {
        let content = loaded(None, None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();

        view.update(&mut state, &cursor_moved(0.0, 0.0), container(), at(0.0, 0.0));
        assert_eq!(
            state.container.bounds(),
            Some(ContainerBounds::new(300.0, 300.0))
        );

        let resized = Rectangle::new(Point::ORIGIN, Size::new(640.0, 480.0));
        view.update(&mut state, &cursor_moved(0.0, 0.0), resized, at(0.0, 0.0));
        assert_eq!(
            state.container.bounds(),
            Some(ContainerBounds::new(640.0, 480.0))
        );
    }

    #[test]
    fn window_close_detaches_observer() {
        let content = loaded(None, None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();

        view.update(&mut state, &cursor_moved(0.0, 0.0), container(), at(0.0, 0.0));
        view.update(
            &mut state,
            &Event::Window(window::Event::Closed),
            container(),
            at(0.0, 0.0),
        );
        assert!(!state.container.is_attached());
        assert!(state.container.bounds().is_none());
    }

    #[test]
    fn on_move_publishes_committed_positions() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view = MovableView::new(&content).on_move(|point| point);
        let mut state = State::default();
        let bounds = container();

        view.update(&mut state, &left_press(), bounds, at(30.0, 40.0));
        let action = view.update(&mut state, &cursor_moved(40.0, 60.0), bounds, at(40.0, 60.0));
        assert!(action.is_some());
        assert_eq!(state.drag.position(), Position::new(10.0, 20.0));
    }

    #[test]
    fn secondary_finger_is_ignored() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();
        let bounds = container();

        let first = touch::Finger(1);
        let second = touch::Finger(2);
        view.update(
            &mut state,
            &Event::Touch(touch::Event::FingerPressed {
                id: first,
                position: Point::new(30.0, 40.0),
            }),
            bounds,
            mouse::Cursor::Unavailable,
        );
        view.update(
            &mut state,
            &Event::Touch(touch::Event::FingerMoved {
                id: second,
                position: Point::new(90.0, 90.0),
            }),
            bounds,
            mouse::Cursor::Unavailable,
        );
        assert_eq!(state.drag.position(), Position::ORIGIN);

        view.update(
            &mut state,
            &Event::Touch(touch::Event::FingerMoved {
                id: first,
                position: Point::new(35.0, 45.0),
            }),
            bounds,
            mouse::Cursor::Unavailable,
        );
        assert_eq!(state.drag.position(), Position::new(5.0, 5.0));

        view.update(
            &mut state,
            &Event::Touch(touch::Event::FingerLifted {
                id: first,
                position: Point::new(35.0, 45.0),
            }),
            bounds,
            mouse::Cursor::Unavailable,
        );
        assert!(!state.drag.is_dragging());
        assert!(state.finger.is_none());
    }

    #[test]
    fn label_only_element_larger_than_container_pins_to_far_edge() {
        let label = Label::new("OK", 15.0, LabelColor::BLACK, Dimensions::new(40.0, 20.0))
            .expect("non-empty label");
        let content = loaded(None, Some(label));
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();
        let small = Rectangle::new(Point::ORIGIN, Size::new(30.0, 10.0));

        view.update(&mut state, &left_press(), small, at(5.0, 5.0));
        view.update(&mut state, &cursor_moved(6.0, 6.0), small, at(6.0, 6.0));

        assert_eq!(view.measurement().size, ComputedSize::new(40.0, 20.0));
        assert_eq!(state.drag.position(), Position::new(-10.0, -10.0));
    }

    #[test]
    fn mouse_interaction_reflects_drag_state() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();
        let bounds = container();

        assert_eq!(
            view.mouse_interaction(&state, bounds, at(30.0, 40.0)),
            mouse::Interaction::Grab
        );
        assert_eq!(
            view.mouse_interaction(&state, bounds, at(250.0, 250.0)),
            mouse::Interaction::default()
        );

        view.update(&mut state, &left_press(), bounds, at(30.0, 40.0));
        assert_eq!(
            view.mouse_interaction(&state, bounds, at(30.0, 40.0)),
            mouse::Interaction::Grabbing
        );
    }

    #[test]
    fn label_text_uses_measured_line_height() {
        let label = Label::new("OK", 20.0, LabelColor::BLACK, Dimensions::new(30.0, 26.0))
            .expect("non-empty label");
        let text = label_text(&label, Position::new(5.0, 7.0), 10.0, 40.0);

        assert_eq!(text.line_height, LineHeight::Relative(LINE_HEIGHT_FACTOR));
        assert_eq!(text.position, Point::new(15.0, 21.0));
        assert_eq!(text.content, "OK");
    }

    #[test]
    fn drawn_line_box_matches_measured_height() {
        let label = crate::media::measured_label("Drag me", 15.0, LabelColor::BLACK)
            .expect("non-empty label");
        let text = label_text(&label, Position::ORIGIN, 0.0, label.bounds().height);

        let line_height = text.line_height.to_absolute(text.size).0;
        assert_abs_diff_eq!(line_height, label.bounds().height, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(text.position.y, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn mouse_release_during_touch_drag_frees_the_finger() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view: MovableView<'_, ()> = MovableView::new(&content);
        let mut state = State::default();
        let bounds = container();

        view.update(
            &mut state,
            &Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(1),
                position: Point::new(30.0, 40.0),
            }),
            bounds,
            mouse::Cursor::Unavailable,
        );
        view.update(&mut state, &left_release(), bounds, at(30.0, 40.0));
        assert!(!state.drag.is_dragging());
        assert!(state.finger.is_none());

        view.update(
            &mut state,
            &Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(2),
                position: Point::new(30.0, 40.0),
            }),
            bounds,
            mouse::Cursor::Unavailable,
        );
        assert!(state.drag.is_dragging());
        assert_eq!(state.finger, Some(touch::Finger(2)));
    }

    #[test]
    fn measurement_is_deferred_until_first_use() {
        let content = loaded(Some(ImageContent::new(50, 50)), None);
        let view: MovableView<'_, ()> = MovableView::new(&content)
            .width(Length::Fixed(80.0))
            .height(Length::Fixed(20.0));
        assert!(view.measurement.get().is_none());

        assert_eq!(view.measurement().size, ComputedSize::new(80.0, 20.0));
        assert_eq!(
            view.measurement.get().map(|measurement| measurement.size),
            Some(ComputedSize::new(80.0, 20.0))
        );
    }
}
