//! Decorator: wrappers add drawing steps around a component.

pub trait VisualComponent {
    fn draw(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct TextView;

impl VisualComponent for TextView {
    fn draw(&self) -> Vec<String> {
        vec!["Drawing TextView".to_string()]
    }
}

/// Draws the wrapped component, then its border.
#[derive(Debug)]
pub struct BorderDecorator<C: VisualComponent> {
    component: C,
}

impl<C: VisualComponent> BorderDecorator<C> {
    pub fn new(component: C) -> Self {
        Self { component }
    }
}

impl<C: VisualComponent> VisualComponent for BorderDecorator<C> {
    fn draw(&self) -> Vec<String> {
        let mut lines = self.component.draw();
        lines.push("Drawing Border".to_string());
        lines
    }
}

impl VisualComponent for Box<dyn VisualComponent> {
    fn draw(&self) -> Vec<String> {
        (**self).draw()
    }
}
