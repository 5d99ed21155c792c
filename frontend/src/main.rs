use leptos::*;
use leptos_router::*;

use frontend::{DefaultPage, PageView, SideBar};

fn main() {
    let style = stylers::style! {
        "Layout",
        .layout {
            display: grid;
            grid-template-columns: 14vw auto;
            min-height: 100vh;

            color: #d5d5d5;
            background-color: #1f1f25;
        }

        .content {
            padding: 1vh 2vw;
        }
    };

    mount_to_body(move || {
        view! {class = style,
            <Router>
                <div class="layout">
                    <nav>
                        <SideBar />
                    </nav>
                    <main class="content">
                        <Routes>
                            <Route path="/" view=DefaultPage />
                            <Route path="/page/:id" view=PageView />
                        </Routes>
                    </main>
                </div>
            </Router>
        }
    })
}
