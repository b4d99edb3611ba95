use std::sync::Arc;

use ironprime_templates_contracts::{Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for TemplateServiceImpl {
    fn default() -> Self {
        let mut tera = Tera::default();

        for &(name, template) in TEMPLATES {
            // Static templates, validated by the tests below.
            tera.add_raw_template(name, template).unwrap();
        }

        Self {
            state: State(tera.into()),
        }
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use ironprime_templates_contracts::ContactNotificationTemplate;

    use super::*;

    fn template() -> ContactNotificationTemplate {
        ContactNotificationTemplate {
            name: "Ana García".into(),
            email: "ana@example.com".into(),
            phone: "+52 55 1234 5678".into(),
            project_type: "Remodelación".into(),
            message: "Hola, quiero una cotización.".into(),
            received_at: "15/03/2025 a las 14:30:00".into(),
        }
    }

    #[test]
    fn contact_notification() {
        let html = TemplateServiceImpl::default().render(&template()).unwrap();

        assert!(html.contains("Ana García"));
        assert!(html.contains(r#"<a href="mailto:ana@example.com">ana@example.com</a>"#));
        assert!(html.contains("+52 55 1234 5678"));
        assert!(html.contains("Remodelación"));
        assert!(html.contains("Hola, quiero una cotización."));
        assert!(html.contains("Recibido el 15/03/2025 a las 14:30:00"));
    }

    #[test]
    fn html_in_fields_is_escaped() {
        let html = TemplateServiceImpl::default()
            .render(&ContactNotificationTemplate {
                message: "<script>alert(1)</script>".into(),
                ..template()
            })
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
