use super::*;

mod rewrites;

const STUDENT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>VALMAtrack - Home</title>
    <link rel="stylesheet" href="studentStyle.css">
</head>
<body>
    <div class="sidebar" id="sidebar">
        <ul class="menu">
            <li class="menu-item active"><a href="studentHome.html">Home</a></li>
            <li class="menu-item"><a href='./studentProfile.html'>Profile</a></li>
        </ul>
    </div>
    <div id="mainContent" class="main-content wide">
        <div class="status-cards"><span id="onTimeCount">0</span></div>
        <img src="../../assets/c.jpg" alt="Clock">
    </div>
    <script src="studentScript.js"></script>
</body>
</html>
"#;

fn doc() -> HtmlDocument {
    HtmlDocument::parse(STUDENT_PAGE)
}
