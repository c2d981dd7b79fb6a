//! Deterministic prompt rendering for cancellation-reason analysis.
//!
//! The template is fixed: same reasons in, same prompt out. Every reason in
//! the request is rendered as its own bullet, in input order, with no
//! truncation or sampling. Repeats stay in the list; how often a reason
//! recurs is exactly the kind of pattern the model is asked to surface.

/// Render the analysis prompt for a reason sequence.
pub fn render_prompt(reasons: &[String]) -> String {
    let mut prompt = String::with_capacity(512 + reasons.iter().map(|r| r.len() + 3).sum::<usize>());

    prompt.push_str(
        "You are a business intelligence analyst for a vehicle rental platform. \
         Below is a list of cancellation reasons submitted by users:\n\n",
    );
    for reason in reasons {
        prompt.push_str("- ");
        prompt.push_str(reason);
        prompt.push('\n');
    }
    prompt.push_str(
        "\nAnalyze these cancellation reasons and respond with a JSON object \
         containing exactly two string fields. The \"summary\" field is a concise \
         paragraph describing the key themes and patterns across the reasons, \
         including how often notable themes recur. The \"suggestions\" field is a \
         paragraph of actionable recommendations the platform could take to reduce \
         cancellations.\n\n\
         Respond with only the JSON object, no other text.",
    );

    prompt
}
