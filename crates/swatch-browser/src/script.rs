//! The in-page serialisation script.
//!
//! One `Runtime.evaluate` call walks the live document and returns the whole
//! snapshot as a JSON string in the [`swatch_dom::wire`] format, so a capture
//! costs a single CDP round trip regardless of page size.

/// Build the script that serialises the computed values of `properties`.
///
/// The script returns a string (not an object) so the payload crosses CDP
/// as one value and is decoded with serde on this side.
#[must_use]
pub fn snapshot_script(properties: &[&str]) -> String {
    let property_list = serde_json::to_string(properties).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"(() => {{
    const PROPERTIES = {property_list};
    const HEADINGS = new Set(["h1", "h2", "h3", "h4", "h5", "h6"]);
    const all = Array.from(document.querySelectorAll("*"));
    const position = new Map(all.map((el, i) => [el, i]));

    const elements = all.map((el) => {{
        const tag = el.tagName.toLowerCase();
        const style = {{}};
        const unreadable = [];
        let computed = null;
        try {{
            computed = window.getComputedStyle(el);
        }} catch (e) {{
            computed = null;
        }}
        for (const prop of PROPERTIES) {{
            try {{
                if (computed === null) throw new Error("no computed style");
                style[prop] = computed.getPropertyValue(prop);
            }} catch (e) {{
                unreadable.push(prop);
            }}
        }}
        const parent = position.has(el.parentElement) ? position.get(el.parentElement) : null;
        const text = HEADINGS.has(tag) ? (el.textContent || "").trim() : null;
        return {{ tag, className: el.getAttribute("class") || "", parent, text, style, unreadable }};
    }});

    const meta = {{}};
    for (const tag of document.querySelectorAll("meta[property], meta[name]")) {{
        const key = tag.getAttribute("property") || tag.getAttribute("name");
        const content = tag.getAttribute("content");
        if (key && content !== null && !(key in meta)) meta[key] = content;
    }}

    const stylesheets = [];
    for (const owner of document.querySelectorAll('link[rel~="stylesheet"], style')) {{
        let ruleCount = null;
        try {{
            ruleCount = owner.sheet ? owner.sheet.cssRules.length : null;
        }} catch (e) {{
            ruleCount = null;
        }}
        const source = owner.tagName.toLowerCase() === "link"
            ? {{ kind: "external", href: owner.href }}
            : {{ kind: "inline" }};
        stylesheets.push({{ source, ruleCount }});
    }}

    return JSON.stringify({{
        url: location.href,
        title: document.title,
        meta,
        elements,
        stylesheets,
    }});
}})()"#
    )
}
