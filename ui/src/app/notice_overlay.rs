use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::text;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::{self, Event};
use iced::widget::container;
use iced::{Color, Element, Length, Point, Rectangle, Size, Vector};

const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.6,
};

/// Dims `content` and shows `notice` centered above it. While the notice is
/// up, `content` receives no events.
#[allow(missing_debug_implementations)]
pub(crate) struct NoticeOverlay<'a, Message, Theme, Renderer>
where
    Theme: container::StyleSheet + widget::text::StyleSheet,
    Renderer: text::Renderer,
{
    content: Element<'a, Message, Theme, Renderer>,
    notice: Element<'a, Message, Theme, Renderer>,
    show_notice: bool,
}

impl<'a, Message, Theme, Renderer> NoticeOverlay<'a, Message, Theme, Renderer>
where
    Theme: container::StyleSheet + widget::text::StyleSheet,
    Renderer: text::Renderer,
{
    pub(crate) fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        notice: impl Into<Element<'a, Message, Theme, Renderer>>,
        show_notice: bool,
    ) -> Self {
        Self {
            content: content.into(),
            notice: notice.into(),
            show_notice,
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for NoticeOverlay<'a, Message, Theme, Renderer>
where
    Theme: container::StyleSheet + widget::text::StyleSheet,
    Renderer: text::Renderer,
{
    fn children(&self) -> Vec<widget::Tree> {
        vec![
            widget::Tree::new(&self.content),
            widget::Tree::new(&self.notice),
        ]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[self.content.as_widget(), self.notice.as_widget()]);
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn size_hint(&self) -> Size<Length> {
        self.content.as_widget().size_hint()
    }

    fn layout(
        &self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn on_event(
        &mut self,
        tree: &mut widget::Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        if self.show_notice {
            return event::Status::Ignored;
        }

        self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        )
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.show_notice {
            return mouse::Interaction::default();
        }

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        inherited_style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            inherited_style,
            layout,
            cursor,
            viewport,
        );
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let mut children = tree.children.iter_mut();
        let content_state = children.next()?;
        let notice_state = children.next()?;

        if !self.show_notice {
            return self.content.as_widget_mut().overlay(
                content_state,
                layout,
                renderer,
                translation,
            );
        }

        Some(overlay::Element::new(Box::new(NoticeLayer {
            position: layout.position() + translation,
            content_bounds: layout.bounds(),
            notice: &mut self.notice,
            state: notice_state,
        })))
    }
}

impl<'a, Message, Theme, Renderer> From<NoticeOverlay<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: container::StyleSheet + widget::text::StyleSheet + 'a,
    Renderer: text::Renderer + 'a,
{
    fn from(
        overlay: NoticeOverlay<'a, Message, Theme, Renderer>,
    ) -> Element<'a, Message, Theme, Renderer> {
        Element::new(overlay)
    }
}

struct NoticeLayer<'a, 'b, Message, Theme, Renderer>
where
    Theme: container::StyleSheet + widget::text::StyleSheet,
    Renderer: text::Renderer,
{
    position: Point,
    content_bounds: Rectangle,
    notice: &'b mut Element<'a, Message, Theme, Renderer>,
    state: &'b mut widget::Tree,
}

impl<'a, 'b, Message, Theme, Renderer> overlay::Overlay<Message, Theme, Renderer>
    for NoticeLayer<'a, 'b, Message, Theme, Renderer>
where
    Theme: container::StyleSheet + widget::text::StyleSheet,
    Renderer: text::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, _bounds: Size) -> layout::Node {
        let area = self.content_bounds.size();
        let notice_layout = self.notice.as_widget().layout(
            self.state,
            renderer,
            &layout::Limits::new(Size::ZERO, area),
        );

        let notice_size = notice_layout.bounds().size();
        let centered = Vector::new(
            ((area.width - notice_size.width) / 2.0).max(0.0),
            ((area.height - notice_size.height) / 2.0).max(0.0),
        );

        layout::Node::with_children(area, vec![notice_layout.translate(centered)])
            .translate(Vector::new(self.position.x, self.position.y))
    }

    fn on_event(
        &mut self,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) -> event::Status {
        let Some(notice_layout) = layout.children().next() else {
            return event::Status::Ignored;
        };

        self.notice.as_widget_mut().on_event(
            self.state,
            event,
            notice_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            &layout.bounds(),
        )
    }

    fn mouse_interaction(
        &self,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        layout
            .children()
            .next()
            .map(|notice_layout| {
                self.notice.as_widget().mouse_interaction(
                    self.state,
                    notice_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .unwrap_or_default()
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        inherited_style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        renderer.fill_quad(
            renderer::Quad {
                bounds: layout.bounds(),
                ..renderer::Quad::default()
            },
            BACKDROP,
        );

        if let Some(notice_layout) = layout.children().next() {
            self.notice.as_widget().draw(
                self.state,
                renderer,
                theme,
                inherited_style,
                notice_layout,
                cursor,
                &layout.bounds(),
            );
        }
    }
}
