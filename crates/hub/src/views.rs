/// Renders the dashboard page. `feedback` and `error` are the banner texts
/// from the broadcast attempt this response belongs to; either may be empty.
pub fn dashboard(feedback: &str, error: &str, messages: &[String]) -> String {
    let mut banners = String::new();
    if !feedback.is_empty() {
        banners.push_str(&format!(
            "    <p style=\"color: green; font-size: 18px;\">{}</p>\n",
            html_escape(feedback)
        ));
    }
    if !error.is_empty() {
        banners.push_str(&format!(
            "    <p style=\"color: red; font-size: 18px;\">{}</p>\n",
            html_escape(error)
        ));
    }

    let items: String = messages
        .iter()
        .map(|msg| format!("      <li>{}</li>\n", html_escape(msg)))
        .collect();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>FleetLink Messaging Dashboard</title>
</head>
<body>
  <div style="text-align: center; margin-top: 50px;">
    <h1>FleetLink Messaging Dashboard</h1>
    <form method="POST" action="/">
      <input type="text" name="message" placeholder="Enter your message" style="width: 300px; height: 30px; font-size: 16px;">
      <br><br>
      <input type="submit" value="Send to All Ships" style="width: 205px; height: 40px; font-size: 16px;">
    </form>
{banners}
    <h2>Received Messages from Ships</h2>
    <ul id="messages">
{items}    </ul>

    <script>
      function fetchMessages() {{
        fetch('/get-messages')
          .then(response => response.json())
          .then(data => {{
            const messagesList = document.getElementById('messages');
            messagesList.innerHTML = '';
            data.forEach(msg => {{
              const listItem = document.createElement('li');
              listItem.textContent = msg;
              messagesList.appendChild(listItem);
            }});
          }})
          .catch(error => console.error('Error fetching messages:', error));
      }}

      setInterval(fetchMessages, 5000);
    </script>
  </div>
</body>
</html>
"#
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_message_markup() {
        let page = dashboard("", "", &["From <b>Ship1</b> (Ada): x & y".to_string()]);
        assert!(page.contains("From &lt;b&gt;Ship1&lt;/b&gt; (Ada): x &amp; y"));
        assert!(!page.contains("<b>Ship1</b>"));
    }

    #[test]
    fn banners_render_only_when_present() {
        let plain = dashboard("", "", &[]);
        assert!(!plain.contains("color: green"));
        assert!(!plain.contains("color: red"));

        let with_feedback = dashboard("Message 'hi' sent to Ships.", "", &[]);
        assert!(with_feedback.contains("color: green"));
        assert!(with_feedback.contains("Message 'hi' sent to Ships."));

        let with_error = dashboard("", "Message is empty.", &[]);
        assert!(with_error.contains("color: red"));
        assert!(with_error.contains("Message is empty."));
    }
}
