//! 渲染样式：基础 CSS 与主题变量块

/// 所有主题共享的基础样式
pub const BASE_STYLES: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            line-height: 1.6;
            overflow-x: hidden;
        }

        .presentation-container {
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }

        .presentation-header {
            padding: 2rem;
            text-align: center;
            border-bottom: 2px solid var(--border-color);
        }

        .presentation-header h1 {
            font-size: 2.5rem;
            margin-bottom: 0.5rem;
        }

        .author {
            font-style: italic;
            opacity: 0.8;
        }

        .slides-container {
            flex: 1;
            padding: 2rem;
        }

        .slide {
            max-width: 1200px;
            margin: 0 auto 4rem;
            padding: 3rem;
            border-radius: 12px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            background: var(--slide-bg);
            min-height: 600px;
            display: flex;
            flex-direction: column;
            position: relative;
        }

        .slide-number {
            position: absolute;
            top: 1rem;
            right: 1rem;
            font-size: 0.875rem;
            opacity: 0.6;
        }

        .slide h2 {
            font-size: 2rem;
            margin-bottom: 1.5rem;
            color: var(--heading-color);
        }

        .slide h3 {
            font-size: 1.5rem;
            margin-bottom: 1rem;
            color: var(--subheading-color);
        }

        .slide p {
            margin-bottom: 1rem;
            color: var(--text-color);
        }

        .slide img {
            max-width: 100%;
            height: auto;
            border-radius: 8px;
        }

        .two-column {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 2rem;
            align-items: start;
        }

        .image-text-container {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 2rem;
            align-items: center;
        }

        .bullet-list {
            list-style: none;
            padding-left: 0;
        }

        .bullet-list li {
            position: relative;
            padding-left: 2rem;
            margin-bottom: 1rem;
            color: var(--text-color);
        }

        .bullet-list li:before {
            content: "\2022";
            position: absolute;
            left: 0;
            color: var(--accent-color);
            font-size: 1.5rem;
            line-height: 1.2;
        }

        .quote-container {
            display: flex;
            flex-direction: column;
            justify-content: center;
            align-items: center;
            text-align: center;
            height: 100%;
        }

        .quote {
            font-size: 1.75rem;
            font-style: italic;
            color: var(--quote-color);
            margin-bottom: 1.5rem;
            position: relative;
            padding: 0 3rem;
        }

        .quote:before,
        .quote:after {
            position: absolute;
            font-size: 3rem;
            color: var(--accent-color);
            opacity: 0.3;
        }

        .quote:before {
            content: "\201C";
            left: 0;
            top: -1rem;
        }

        .quote:after {
            content: "\201D";
            right: 0;
            bottom: -2rem;
        }

        .quote-author {
            font-size: 1.125rem;
            color: var(--subheading-color);
        }

        .full-image-container {
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            height: 100%;
        }

        .full-image-container img {
            max-height: 500px;
            object-fit: contain;
        }

        .image-caption {
            margin-top: 1rem;
            font-style: italic;
            color: var(--subheading-color);
            text-align: center;
        }

        .title-slide {
            display: flex;
            flex-direction: column;
            justify-content: center;
            align-items: center;
            text-align: center;
        }

        .title-slide h2 {
            font-size: 3rem;
            margin-bottom: 1rem;
        }

        .title-slide h3 {
            font-size: 1.75rem;
            opacity: 0.9;
        }

        .presentation-footer {
            padding: 2rem;
            text-align: center;
            border-top: 2px solid var(--border-color);
            opacity: 0.7;
        }

        @media (max-width: 768px) {
            .slide {
                padding: 2rem;
                min-height: 400px;
            }

            .two-column,
            .image-text-container {
                grid-template-columns: 1fr;
            }

            .slide h2 {
                font-size: 1.5rem;
            }

            .title-slide h2 {
                font-size: 2rem;
            }

            .quote {
                font-size: 1.25rem;
            }
        }
"#;

/// 亮色主题变量
pub const LIGHT_THEME_STYLES: &str = r#"
        :root {
            --bg-color: #f5f5f5;
            --text-color: #333333;
            --heading-color: #000000;
            --subheading-color: #666666;
            --slide-bg: #ffffff;
            --border-color: #e0e0e0;
            --accent-color: #0066cc;
            --quote-color: #555555;
        }

        body {
            background: var(--bg-color);
            color: var(--text-color);
        }
"#;

/// 暗色主题变量
pub const DARK_THEME_STYLES: &str = r#"
        :root {
            --bg-color: #1a1a1a;
            --text-color: #e0e0e0;
            --heading-color: #ffffff;
            --subheading-color: #b0b0b0;
            --slide-bg: #2a2a2a;
            --border-color: #404040;
            --accent-color: #4a9eff;
            --quote-color: #d0d0d0;
        }

        body {
            background: var(--bg-color);
            color: var(--text-color);
        }
"#;
