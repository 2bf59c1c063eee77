//! Minimal model/view/presenter scaffolding for observable-driven state.
//!
//! Models expose [`Observable`] fields; views subscribe through scoped
//! connections, so tearing a view down unhooks it from the model.
//!
//! [`Observable`]: crate::Observable

/// State owned by a presenter and watched by views.
pub trait Model {}

/// Anything that refreshes from model state and draws itself.
pub trait View {
    /// Pulls pending state into the view.
    fn update(&mut self);
    /// Draws the current view state.
    fn render(&mut self);
}

/// Owns one model and one view and drives them once per frame.
pub struct Presenter<M: Model, V: View> {
    model: M,
    view: V,
}

impl<M: Model, V: View> Presenter<M, V> {
    pub fn new(model: M, view: V) -> Self {
        Self { model, view }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn update(&mut self) {
        self.view.update();
    }

    pub fn render(&mut self) {
        self.view.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Observable;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct HealthModel {
        health: Observable<i32>,
    }

    impl Model for HealthModel {}

    struct HealthLabel {
        text: Rc<RefCell<String>>,
        rendered: Vec<String>,
    }

    impl View for HealthLabel {
        fn update(&mut self) {}

        fn render(&mut self) {
            self.rendered.push(self.text.borrow().clone());
        }
    }

    #[test]
    fn test_presenter_renders_observable_changes() {
        let text = Rc::new(RefCell::new(String::from("hp: 100")));
        let sink = Rc::clone(&text);
        let model = HealthModel {
            health: Observable::new(100),
        };
        let view = HealthLabel {
            text,
            rendered: Vec::new(),
        };
        let mut presenter = Presenter::new(model, view);

        let _binding = presenter
            .model()
            .health
            .connect_scoped(move |health| *sink.borrow_mut() = format!("hp: {health}"));

        presenter.model_mut().health.set(75);
        presenter.update();
        presenter.render();

        assert_eq!(presenter.view().rendered, vec![String::from("hp: 75")]);
    }

    #[test]
    fn test_presenter_hands_out_its_parts() {
        let model = HealthModel {
            health: Observable::new(3),
        };
        let view = HealthLabel {
            text: Rc::new(RefCell::new(String::new())),
            rendered: Vec::new(),
        };
        let mut presenter = Presenter::new(model, view);

        assert_eq!(*presenter.model().health.get(), 3);
        presenter.view_mut().rendered.push(String::from("frame"));
        assert_eq!(presenter.view().rendered.len(), 1);
    }
}
