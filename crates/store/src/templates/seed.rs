//! Built-in resignation letter templates

use super::{Template, TemplateCategory};

const PROFESSIONAL: &str = "Dear {{manager_name}},

I am writing to formally notify you of my resignation from my position as {{job_title}} at {{company_name}}, effective {{last_working_day}}.

I have accepted an opportunity that aligns more closely with my career goals. I want to express my sincere gratitude for the professional growth and experiences I've gained during my tenure here. The skills and knowledge I've acquired will undoubtedly contribute to my future endeavors.

I am committed to ensuring a smooth transition and will complete all pending projects and handover documentation before my departure. Please let me know how I can assist during this transition period.

Thank you for your understanding and support.

Sincerely,
{{your_name}}";

const FRIENDLY: &str = "Hi {{manager_name}},

I wanted to let you know that I'll be moving on from my role as {{job_title}} at {{company_name}}. My last day will be {{last_working_day}}.

It's been a wonderful experience working here, and I've genuinely enjoyed being part of such a great team. While I'm excited about this new chapter, I'll definitely miss the collaborative environment and friendships we've built.

I'm happy to help train my replacement and wrap up my current projects. Let's stay in touch!

Wishing the team continued success.

Best regards,
{{your_name}}";

const SHORT_NOTICE: &str = "Dear {{manager_name}},

Please accept this letter as formal notice of my resignation from my position as {{job_title}} at {{company_name}}, effective immediately.

Due to unforeseen circumstances, I am unable to continue in my current role. I apologize for any inconvenience this may cause.

I appreciate the opportunities provided during my time here.

Regards,
{{your_name}}";

/// The three seed letters: professional, friendly and short notice.
pub fn seed_templates() -> Vec<Template> {
    vec![
        Template::new(
            "mock-1",
            "Professional Resignation",
            PROFESSIONAL,
            TemplateCategory::Professional,
        ),
        Template::new(
            "mock-2",
            "Friendly Resignation",
            FRIENDLY,
            TemplateCategory::Friendly,
        ),
        Template::new(
            "mock-3",
            "Short Notice Resignation",
            SHORT_NOTICE,
            TemplateCategory::Short,
        ),
    ]
}
