/// A reply in the shape the chat server sends for help requests.
pub fn help_reply_fixture() -> &'static str {
    return r#"
I can help you with travel planning! Here's what I can do:

**Path Finding:**
• "Find shortest path from Paris to Berlin"
• "Show fewest stops from NYC to LA"

**Information:**
• "List all cities"
• "Show map statistics"

Just ask me in natural language!
"#
    .trim();
}

/// A path finding reply, mixing bold spans and a bullet list.
pub fn path_reply_fixture() -> &'static str {
    return r#"
**Shortest path from Paris to Berlin:**
• Paris → Brussels (264 km)
• Brussels → Berlin (651 km)
**Total distance:** 915 km
"#
    .trim();
}
