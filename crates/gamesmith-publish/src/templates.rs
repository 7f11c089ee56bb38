//! String templates for unit artifacts.
//!
//! Everything here is plain rendering: the generated "source" text is an
//! opaque stub that this system never interprets or executes. All output
//! is deterministic given a unit and the factory configuration, which is
//! what makes repeated persists byte-identical.

use chrono::Datelike;

use gamesmith_core::{Dimension, FactoryConfig, Unit};

/// Render the descriptive README for a unit directory.
pub fn render_readme(unit: &Unit, config: &FactoryConfig) -> String {
    let identity = &config.identity;
    let mut lines = Vec::new();

    lines.push(format!("# {}", unit.name));
    lines.push(format!("## {} {} Template", unit.dimension, unit.kind));
    lines.push(format!(
        "### Created by {} Game Factory v{}",
        identity.brand, config.version
    ));
    lines.push(String::new());
    lines.push(format!("**Game ID:** `{}`", unit.id));
    lines.push(format!("**Price:** `${}`", unit.price));
    lines.push(format!("**Engine:** {}", unit.engine));
    lines.push(format!("**Created:** {}", unit.created_at.to_rfc3339()));
    lines.push("**Status:** Ready for sale".to_string());
    lines.push(String::new());

    lines.push("## What you get".to_string());
    lines.push("- Complete source code (100% original)".to_string());
    lines.push("- All game assets included".to_string());
    lines.push("- Commercial license".to_string());
    lines.push("- 30 days free support".to_string());
    lines.push("- Easy to customize".to_string());
    lines.push(format!("- Ready for {}", unit.engine));
    lines.push(String::new());

    lines.push("## How to purchase".to_string());
    lines.push(format!(
        "1. Send `${}` via PayPal to: `{}`",
        unit.price, identity.contact_email
    ));
    lines.push(format!(
        "2. Email payment confirmation to: `{}`",
        identity.contact_email
    ));
    lines.push("3. Receive download link within 24 hours".to_string());
    lines.push(String::new());

    lines.push("## Links".to_string());
    lines.push(format!("- **GitHub**: {}", unit.repo_url));
    lines.push(format!("- **Payment**: {}", unit.payment));
    lines.push(format!("- **Contact**: {}", unit.contact));
    lines.push(String::new());

    lines.push("## Support".to_string());
    lines.push(format!("Email: `{}`", identity.contact_email));
    lines.push(format!("Brand: `{}`", identity.brand));
    lines.push("Response time: 24 hours".to_string());
    lines.push(String::new());

    lines.push("## License".to_string());
    lines.push("Single Project Commercial License".to_string());
    lines.push(format!(
        "Copyright (c) {} {}",
        unit.created_at.year(),
        identity.brand
    ));
    lines.push("All rights reserved.".to_string());
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(format!(
        "*Automatically generated by {} Game Factory v{}*",
        identity.brand, config.version
    ));
    lines.push(format!("*Runs until: {}*", config.schedule.target_end_date));
    lines.push(String::new());

    lines.join("\n")
}

/// Render the stub source text for a unit, selected by dimension.
pub fn render_stub(unit: &Unit, config: &FactoryConfig) -> String {
    match unit.dimension {
        Dimension::TwoD => render_2d_stub(unit, config),
        Dimension::ThreeD => render_3d_stub(unit, config),
    }
}

fn render_2d_stub(unit: &Unit, config: &FactoryConfig) -> String {
    format!(
        r#"# {name}
# {dimension} {kind} Template
# Created by {brand} Game Factory

import pygame
import sys


class Game:
    def __init__(self):
        pygame.init()
        self.screen = pygame.display.set_mode((800, 600))
        pygame.display.set_caption("{name}")
        self.clock = pygame.time.Clock()
        self.running = True
        self.score = 0
        self.font = pygame.font.Font(None, 36)

    def handle_events(self):
        for event in pygame.event.get():
            if event.type == pygame.QUIT:
                self.running = False
            if event.type == pygame.KEYDOWN and event.key == pygame.K_SPACE:
                self.score += 10

    def draw(self):
        self.screen.fill((30, 30, 60))
        title = self.font.render("{name}", True, (255, 255, 255))
        self.screen.blit(title, (50, 50))
        score = self.font.render(f"Score: {{self.score}}", True, (255, 255, 0))
        self.screen.blit(score, (50, 100))
        info = pygame.font.Font(None, 24).render(
            "Price: ${price} | Contact: {contact}", True, (200, 200, 200)
        )
        self.screen.blit(info, (50, 150))
        pygame.display.flip()

    def run(self):
        while self.running:
            self.handle_events()
            self.draw()
            self.clock.tick(60)
        pygame.quit()
        sys.exit()


if __name__ == "__main__":
    Game().run()
"#,
        name = unit.name,
        dimension = unit.dimension,
        kind = unit.kind,
        brand = config.identity.brand,
        price = unit.price,
        contact = unit.contact,
    )
}

fn render_3d_stub(unit: &Unit, config: &FactoryConfig) -> String {
    format!(
        r#"# {name}
# {dimension} {kind} Template
# Created by {brand} Game Factory

print("{name}")
print("{dimension} {kind} Template")
print("Engine: {engine}")
print("Price: ${price}")
print("Contact: {contact}")
print("=" * 40)


class Game3D:
    def __init__(self):
        self.score = 0
        self.level = 1

    def start(self):
        print("Game starting... WASD to move, Space to jump")
        for _ in range(10):
            self.score += 100
            print(f"Level {{self.level}} - Score: {{self.score}}")
            if self.score >= 500:
                self.level += 1
                self.score = 0
                print(f"Level up! Now level {{self.level}}")
        print("Game completed!")
        print("Contact {contact} for the full source code")


if __name__ == "__main__":
    Game3D().start()
"#,
        name = unit.name,
        dimension = unit.dimension,
        kind = unit.kind,
        brand = config.identity.brand,
        engine = unit.engine,
        price = unit.price,
        contact = unit.contact,
    )
}

pub fn render_promo_short(unit: &Unit, config: &FactoryConfig) -> String {
    format!(
        "{} - ${}\nContact: {}",
        unit.name, unit.price, config.identity.contact_email
    )
}

pub fn render_promo_medium(unit: &Unit, config: &FactoryConfig) -> String {
    format!(
        "NEW GAME TEMPLATE\n{} {} - ${}\n\nComplete source code and assets\nReady for {}\n\nContact: {}\nBrand: {}",
        unit.dimension,
        unit.kind,
        unit.price,
        unit.engine,
        config.identity.contact_email,
        config.identity.brand
    )
}

pub fn render_promo_long(unit: &Unit, config: &FactoryConfig) -> String {
    let identity = &config.identity;
    format!(
        r#"ATTENTION GAME DEVELOPERS

{name}
{dimension} {kind} Template

PRICE: ${price}
ENGINE: {engine}
CONTACT: {contact}
BRAND: {brand}

INCLUDES:
- Complete source code
- All game assets
- Commercial license
- 30 days support
- Easy to customize

PERFECT FOR:
- Indie developers
- Game studios
- Students
- Hobbyists

GitHub: {repo_url}

#gamedev #indiedev #{dim_tag}game #{kind_tag}"#,
        name = unit.name,
        dimension = unit.dimension,
        kind = unit.kind,
        price = unit.price,
        engine = unit.engine,
        contact = identity.contact_email,
        brand = identity.brand,
        repo_url = unit.repo_url,
        dim_tag = unit.dimension.tag(),
        kind_tag = unit.kind.replace(' ', "").to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gamesmith_core::Dimension;

    fn sample_unit(dimension: Dimension, kind: &str) -> Unit {
        Unit {
            id: "GS0123456789abcdef_20260601080000".to_string(),
            name: format!("Gamesmith_{}_{}_20260601080000", dimension.label(), kind),
            dimension,
            kind: kind.to_string(),
            price: 149,
            engine: "Godot".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap(),
            repo_url: "https://github.com/gamesmith-dev/gamesmith/tree/main/games/GS0123456789abcdef_20260601080000".to_string(),
            payment: "PayPal $149 to sales@gamesmith.dev".to_string(),
            contact: "sales@gamesmith.dev".to_string(),
            brand: "gamesmith.dev".to_string(),
        }
    }

    #[test]
    fn readme_references_every_unit_field() {
        let unit = sample_unit(Dimension::TwoD, "Puzzle");
        let readme = render_readme(&unit, &FactoryConfig::default());
        for needle in [
            unit.id.as_str(),
            unit.name.as_str(),
            "2D Puzzle Template",
            "$149",
            "Godot",
            unit.repo_url.as_str(),
            "2026-06-01T08:00:00",
            "sales@gamesmith.dev",
            "2027-12-31",
            "Copyright (c) 2026",
        ] {
            assert!(readme.contains(needle), "README missing {needle:?}");
        }
    }

    #[test]
    fn stub_template_is_selected_by_dimension() {
        let config = FactoryConfig::default();
        let two_d = render_stub(&sample_unit(Dimension::TwoD, "Runner"), &config);
        let three_d = render_stub(&sample_unit(Dimension::ThreeD, "Racing"), &config);
        assert!(two_d.contains("import pygame"));
        assert!(!three_d.contains("import pygame"));
        assert!(three_d.contains("Game3D"));
        // interpolation placeholders must not leak into output
        assert!(!two_d.contains("{name}"));
        assert!(!three_d.contains("{contact}"));
        // generated python keeps its own f-string braces
        assert!(two_d.contains("f\"Score: {self.score}\""));
    }

    #[test]
    fn promo_variants_grow_in_length() {
        let unit = sample_unit(Dimension::ThreeD, "Battle Royale");
        let config = FactoryConfig::default();
        let short = render_promo_short(&unit, &config);
        let medium = render_promo_medium(&unit, &config);
        let long = render_promo_long(&unit, &config);
        assert!(short.len() < medium.len());
        assert!(medium.len() < long.len());
        assert!(long.contains("#battleroyale"));
        assert!(long.contains("#3dgame"));
    }
}
