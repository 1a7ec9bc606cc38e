use folio::{IdentityStack, MemoryTemplateLoader, SpecialVariable};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wire up logging for a test run; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The three projections as a template expression would see them:
/// (currentTemplateName, mainTemplateName, templateName).
pub type Projection = (Option<String>, Option<String>, String);

pub fn observe(stack: &IdentityStack) -> Projection {
    let resolve = |var: SpecialVariable| var.resolve(stack).map(str::to_string);
    (
        resolve(SpecialVariable::CurrentTemplateName),
        resolve(SpecialVariable::MainTemplateName),
        resolve(SpecialVariable::TemplateName)
            .expect("the deprecated projection always yields a value"),
    )
}

/// Shorthand for building expected projection rows.
pub fn row(current: &str, main: &str, legacy: &str) -> Projection {
    (
        Some(current.to_string()),
        Some(main.to_string()),
        legacy.to_string(),
    )
}

/// A loader populated with the template set the walkthrough renders:
/// a main template importing a macro library, including a fragment, and
/// calling macros from both.
pub fn reference_loader() -> MemoryTemplateLoader {
    let loader = MemoryTemplateLoader::new();
    loader
        .put(
            "main.ftl",
            "In main: ${currentTemplateName}\n\
             <#import 'imp.ftl' as lib>\n\
             <@lib.greet>${currentTemplateName}</@>\n\
             <#include 'inc.ftl'>\n\
             <@banner>${currentTemplateName}</@>\n",
        )
        .expect("loader registration");
    loader
        .put(
            "imp.ftl",
            "<#macro greet>${currentTemplateName} {<#nested>}</#macro>\n\
             <#macro section><@greet>${currentTemplateName}</@></#macro>\n",
        )
        .expect("loader registration");
    loader
        .put(
            "inc.ftl",
            "In inc: ${currentTemplateName}\n\
             <#macro banner>${currentTemplateName} {<#nested>}</#macro>\n\
             <#macro wrapper><@lib.greet>${currentTemplateName}</@></#macro>\n",
        )
        .expect("loader registration");
    loader
}
