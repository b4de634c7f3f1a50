//! GLSL 330 core sources for the demo's only program.

/// Passes the position attribute through untransformed.
pub const VERTEX: &str = r"#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

/// Flat orange fill; in wireframe mode this is the line color.
pub const FRAGMENT: &str = r"#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_target_gl330_core() {
        assert!(VERTEX.starts_with("#version 330 core"));
        assert!(FRAGMENT.starts_with("#version 330 core"));
    }

    #[test]
    fn vertex_position_lives_at_location_zero() {
        assert!(VERTEX.contains("layout (location = 0) in vec3 aPos"));
    }
}
